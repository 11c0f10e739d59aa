pub mod io;

pub use self::io::{save_rgb_png, write_json_file};
