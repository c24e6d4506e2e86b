//! Engine constants and runtime configuration defaults

// Grid sizing
/// Grid side length when no size has been persisted
pub const BASE_SIZE: u32 = 20;
/// Tile edge length in pixels at level 0
pub const BASE_TILE_SIZE: f64 = 28.0;
/// Tile type assigned to cells first seen with no other fallback
pub const DEFAULT_TILE_TYPE: &str = "tile1";

// Scaling
/// Per-level tile shrink ratio
pub const SCALE_DECAY: f64 = 0.97;
/// Cell count the limiting viewport axis should fit at full tile size
pub const TARGET_VISIBLE_CELLS: f64 = 20.0;
/// Viewport width assumed when none is supplied
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1280.0;
/// Viewport height assumed when none is supplied
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 800.0;

// Reveal animation
/// Total duration of an expansion's staggered reveal in milliseconds
pub const REVEAL_TOTAL_MS: u64 = 3000;

// Persisted keys, scoped under the store prefix
/// Key prefix for per-cell type records, completed by `x,y`
pub const CELL_KEY_PREFIX: &str = "island:cell:";
/// Key holding the persisted grid side length
pub const SIZE_KEY: &str = "island:size";
/// Key holding the persisted level
pub const LEVEL_KEY: &str = "island:level";
/// Key holding the player's currency balance
pub const MONEY_KEY: &str = "player:money";
/// Store namespace prefix applied to every key
pub const DEFAULT_PREFIX: &str = "islet";

// Player economy
/// Currency balance granted when none has been persisted
pub const BASE_MONEY: i64 = 100_000;

// Image resolution
/// Candidate image extensions in preference order
pub const IMAGE_EXTENSIONS: [&str; 2] = ["png", "gif"];

// Shell defaults
/// Store document used when no data file is specified
pub const DEFAULT_DATA_FILE: &str = "islet-data.json";
/// Upgrade catalog file used when none is specified
pub const DEFAULT_CATALOG_FILE: &str = "upgrades.json";
/// Tile artwork directory used when none is specified
pub const DEFAULT_ASSET_DIR: &str = "assets";
/// Width of the reveal progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
