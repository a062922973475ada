pub mod category;
pub mod task;
pub mod user;

pub use category::{Category, CategoryInput};
pub use task::{Attachment, NewTask, Task, TaskPriority, TaskStatus};
pub use user::User;
