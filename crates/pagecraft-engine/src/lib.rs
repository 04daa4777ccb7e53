pub mod blocks;
pub mod codec;
pub mod document;
pub mod io;
pub mod registry;
pub mod render;
pub mod resolve;
pub mod schema;
pub mod session;
pub mod value;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use codec::{CodecError, decode, encode, encode_compact};
pub use document::{BlockId, BlockInstance, Document, RootData, ZoneKey};
pub use registry::{BlockDescriptor, Category, Registry, RegistryBuilder, RegistryError};
pub use render::{Markup, RenderedZones, Renderer};
pub use resolve::{
    ReportKind, ResolveError, ResolveReport, ResolvedBlock, ResolvedNode, ResolvedPage,
    ResolvedZone, Resolver, ValidationMode,
};
pub use session::{EditSession, SessionError};
pub use value::{PropertyValue, Props, PropsExt};
