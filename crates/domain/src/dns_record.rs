mod mx;
mod record_set;
mod record_type;

pub use mx::MxRecord;
pub use record_set::{RecordSet, RecordStatus};
pub use record_type::RecordType;
