pub mod color;
pub mod cons;
pub mod cons_list;
pub mod sexp;

mod fmt_io_adapter;


pub use self::cons::Cons;
pub use self::cons_list::ConsList;
pub use self::sexp::{render, HeapSexp, Sexp, SexpIter};
