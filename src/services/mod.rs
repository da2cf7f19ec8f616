pub use preview::DEFAULT_PREVIEW_SLUG;

mod preview;
