//! Static table of browser vendor prefixes.

/// One browser engine's prefix and the contexts it applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vendor {
    pub name: &'static str,
    /// Prepended to names and values, e.g. `-webkit-`. Empty for the standard form.
    pub prefix: &'static str,
    /// Whether an `@<prefix>keyframes` block is emitted for this vendor.
    pub keyframes: bool,
}

/// Vendors in output order; the unprefixed standard form comes last so it
/// wins in the cascade.
pub const VENDORS: &[Vendor] = &[
    Vendor {
        name: "webkit",
        prefix: "-webkit-",
        keyframes: true,
    },
    Vendor {
        name: "moz",
        prefix: "-moz-",
        keyframes: true,
    },
    // IE 10 shipped `@keyframes` unprefixed.
    Vendor {
        name: "ms",
        prefix: "-ms-",
        keyframes: false,
    },
    Vendor {
        name: "o",
        prefix: "-o-",
        keyframes: true,
    },
    Vendor {
        name: "standard",
        prefix: "",
        keyframes: true,
    },
];

/// Prefixes to emit `@keyframes` blocks for, in table order.
pub fn keyframes_prefixes() -> impl Iterator<Item = &'static str> {
    VENDORS.iter().filter(|v| v.keyframes).map(|v| v.prefix)
}
