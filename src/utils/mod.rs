pub mod local_log;
pub mod props;
pub mod utils_time;

pub use local_log::LocalLogger;
pub use props::{should_not_forward_props_with_keys, PropFilter};
pub use utils_time::{sleep, sleep_for};
