pub mod code_blocks;
pub mod images;
pub mod priority;
pub mod sections;
pub mod title;

pub use code_blocks::CodeBlock;
pub use images::ImageRecord;
pub use priority::Priority;
pub use sections::Section;

// ── Tests ──
