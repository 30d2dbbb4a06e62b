//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet. Every flag is further gated by `cfg(debug_assertions)`
//! at the call site.

pub struct DebugFlags {
    /// Emit every pivot the rotating-envelope solver visits.
    pub print_rotation_steps: bool,
    /// Emit each bisection probe (offset, bounds and resulting sign).
    pub print_binary_search: bool,
    /// Emit pool sizes and clipping thresholds for each smoothing pass.
    pub print_smoothing: bool,
    /// Emit series file load/save messages.
    pub print_serde: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_rotation_steps: false,
    print_binary_search: false,
    print_smoothing: false,
    print_serde: false,
};
