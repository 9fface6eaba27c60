pub mod detail;
pub mod list;

pub use detail::Detail;
pub use list::List;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    List,
    Detail,
}
