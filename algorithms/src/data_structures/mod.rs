pub mod bst;
pub mod heap;
pub mod linked_list;

pub use bst::BinarySearchTree;
pub use heap::MinHeap;
pub use linked_list::LinkedList;
