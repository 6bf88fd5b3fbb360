mod game_state;
mod pair;
mod resolve;

pub use game_state::PuyoGame;
pub use pair::{Pair, PairCell, SPAWN_COL, SPAWN_ROW};
pub use resolve::{apply_gravity, find_clusters, resolve, Cluster, PuyoBoard, ResolveReport};
