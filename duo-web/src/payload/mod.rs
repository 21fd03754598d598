pub mod codec;
pub mod errors;

pub use codec::PayloadCodec;
pub use errors::PayloadError;
