pub mod data_url;
pub mod errors;
pub mod metadata;
pub mod save;
pub mod svg;

pub use data_url::svg_data_url;
pub use errors::ExportError;
pub use metadata::ExportMetadata;
pub use save::{export_svg, write_svg, SVG_FILE_NAME};
pub use svg::SvgSink;
