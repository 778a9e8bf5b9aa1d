//! Component state machines.
//!
//! DESIGN
//! ======
//! Each module holds plain state with pure transitions and no browser
//! dependency, so behavior is testable natively. The `components` bindings
//! own one instance each and mirror it onto the DOM.

pub mod accordion;
pub mod mascot;
pub mod mobile_nav;
pub mod nav;
pub mod theme;
