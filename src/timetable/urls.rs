use crate::routing::{ConfigError, Namespace, path};
use crate::timetable::views::index;

pub const APP_NAME: &str = "timetable";

pub fn urlpatterns() -> Result<Namespace, ConfigError> {
    Namespace::new(APP_NAME, vec![path("", index, "index")])
}
