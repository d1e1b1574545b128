mod assumed;
pub use assumed::*;

pub mod assumption;
pub mod ignore;
pub mod probe;
pub mod registrar;

pub use probe::assume;
