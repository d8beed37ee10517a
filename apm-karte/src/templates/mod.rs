//! View structs for the handlebars templates in `templates/`.

pub mod map;
