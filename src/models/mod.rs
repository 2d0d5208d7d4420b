pub mod attendance;
pub mod student;

pub use attendance::AttendanceSheet;
pub use student::{StudentKey, StudentRecord};
