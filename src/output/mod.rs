mod output;

pub use output::render;
pub use output::LineRecord;
pub use output::OutputFormat;
pub use output::Rendered;
