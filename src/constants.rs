// Event loop timing
pub const POLL_INTERVAL_MS: u64 = 50;

// Damage resolution
pub const MIN_DAMAGE: u32 = 1;
pub const STRONG_FACTOR: f64 = 2.0;
pub const WEAK_FACTOR: f64 = 0.5;
pub const NEUTRAL_FACTOR: f64 = 1.0;

// Battle log
pub const BATTLE_LOG_CAPACITY: usize = 12;

// Squad battles
pub const SQUAD_SIZE: usize = 3;

// Random-mode simulation
pub const DEFAULT_MOVE_BUDGET: u32 = 200;
pub const DEFAULT_SIM_BATTLES: u32 = 100;

// Dashboard status markers
pub const MARKER_SUCCESS: &str = "[+]";
pub const MARKER_FAILURE: &str = "[x]";
pub const MARKER_UNKNOWN: &str = "[?]";
