//! Leaderboard and best-record persistence over browser local storage.
//!
//! Key space: `leaderboard_<game_id>` holds a JSON array of
//! [`ScoreEntry`], capped at ten entries, descending by score, stable for
//! ties in call order. `best_<game_id>` holds a single JSON number for
//! games that track a personal best instead of (or next to) the shared
//! board. An absent or corrupt value reads as empty/absent; persistence
//! failures log a console warning and the game carries on.
//!
//! The insert/trim/sort step is a pure function so the ordering contract
//! is testable on the host; only the storage I/O is wasm-gated.

use serde::{Deserialize, Serialize};

/// Maximum entries kept per game board.
#[cfg(any(target_arch = "wasm32", test))]
pub const MAX_ENTRIES: usize = 10;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
    /// ISO-8601 timestamp of the run.
    pub date: String,
}

#[cfg(any(target_arch = "wasm32", test))]
fn board_key(game_id: &str) -> String {
    format!("leaderboard_{game_id}")
}

#[cfg(target_arch = "wasm32")]
fn best_key(game_id: &str) -> String {
    format!("best_{game_id}")
}

/// Append a finished run to a board: the entry is pushed, the board is
/// stably sorted descending by score (so equal scores keep call order),
/// and trimmed to [`MAX_ENTRIES`].
#[cfg(any(target_arch = "wasm32", test))]
pub fn insert_entry(mut entries: Vec<ScoreEntry>, entry: ScoreEntry) -> Vec<ScoreEntry> {
    entries.push(entry);
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries.truncate(MAX_ENTRIES);
    entries
}

/// Optional hosted-database configuration (URL + API key) taken from the
/// build environment. When unset, [`RemoteStore::configured`] is `None`
/// and the local-storage path above is the only backend. The remote path
/// is a declared integration point: nothing routes reads or writes
/// through it yet.
#[allow(dead_code)]
pub struct RemoteStore {
    pub url: &'static str,
    pub api_key: &'static str,
}

impl RemoteStore {
    #[allow(dead_code)]
    pub fn configured() -> Option<Self> {
        match (
            option_env!("PLAYGROUND_DB_URL"),
            option_env!("PLAYGROUND_DB_KEY"),
        ) {
            (Some(url), Some(api_key)) if !url.is_empty() && !api_key.is_empty() => {
                Some(Self { url, api_key })
            }
            _ => None,
        }
    }
}

/// Access localStorage. WASM only; `None` when the window or storage is
/// unavailable (e.g. storage disabled), which degrades every caller to
/// in-memory behaviour.
#[cfg(target_arch = "wasm32")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

#[cfg(target_arch = "wasm32")]
fn now_iso() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}

/// Read a game's board. Missing key → empty list. Corrupt JSON → warn,
/// drop the stored value, empty list. Never fails.
#[cfg(target_arch = "wasm32")]
pub fn fetch(game_id: &str) -> Vec<ScoreEntry> {
    let storage = match storage() {
        Some(s) => s,
        None => return Vec::new(),
    };

    let json = match storage.get_item(&board_key(game_id)) {
        Ok(Some(j)) => j,
        _ => return Vec::new(),
    };

    match serde_json::from_str(&json) {
        Ok(entries) => entries,
        Err(e) => {
            web_sys::console::warn_1(
                &format!("leaderboard: discarding corrupt board for {game_id}: {e}").into(),
            );
            let _ = storage.remove_item(&board_key(game_id));
            Vec::new()
        }
    }
}

/// Record a finished run and return the updated top list. Called exactly
/// once per run, at the moment the session enters its terminal state.
#[cfg(target_arch = "wasm32")]
pub fn record(game_id: &str, score: u32, name: &str) -> Vec<ScoreEntry> {
    let updated = insert_entry(
        fetch(game_id),
        ScoreEntry {
            name: name.to_string(),
            score,
            date: now_iso(),
        },
    );

    if let Some(storage) = storage() {
        match serde_json::to_string(&updated) {
            Ok(json) => {
                if let Err(e) = storage.set_item(&board_key(game_id), &json) {
                    web_sys::console::warn_1(
                        &format!("leaderboard: failed to persist {game_id}: {e:?}").into(),
                    );
                }
            }
            Err(e) => {
                web_sys::console::warn_1(
                    &format!("leaderboard: failed to encode {game_id}: {e}").into(),
                );
            }
        }
    }

    updated
}

/// Load a game's single-value personal best. Absent or unreadable → `None`.
#[cfg(target_arch = "wasm32")]
pub fn load_best(game_id: &str) -> Option<u32> {
    let json = storage()?.get_item(&best_key(game_id)).ok()??;
    serde_json::from_str(&json).ok()
}

/// Persist a game's single-value personal best.
#[cfg(target_arch = "wasm32")]
pub fn store_best(game_id: &str, value: u32) {
    if let Some(storage) = storage() {
        if let Err(e) = storage.set_item(&best_key(game_id), &value.to_string()) {
            web_sys::console::warn_1(
                &format!("leaderboard: failed to persist best for {game_id}: {e:?}").into(),
            );
        }
    }
}
