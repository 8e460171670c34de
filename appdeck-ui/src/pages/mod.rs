mod application_create;
mod application_detail;
mod application_list;
mod workload_detail;

pub use application_create::ApplicationCreate;
pub use application_detail::ApplicationDetail;
pub use application_list::ApplicationList;
pub use workload_detail::Workload;
