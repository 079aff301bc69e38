//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Hold the one live carousel session the host scroll surface drives.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Scroll and settle calls return the corrected offset in the same call;
//!   the host applies it without animation when `teleported` is set.

use log::info;
use loopdeck_core::db::open_db;
use loopdeck_core::{
    core_version as core_version_inner, dots, init_logging as init_logging_inner, map_visual,
    ping as ping_inner, Card, CarouselLayout, Deck, JournalService, ScrollController, SlotKind,
    SqliteEntryRepository,
};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};
use uuid::Uuid;

const JOURNAL_LIST_LIMIT_MAX: u32 = 100;
const JOURNAL_DB_FILE_NAME: &str = "loopdeck_journal.sqlite3";
static JOURNAL_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

static CAROUSEL: Mutex<Option<ScrollController>> = Mutex::new(None);

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Card data crossing the boundary from the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardInput {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub color: String,
    pub image: Option<String>,
    pub route: Option<String>,
}

/// One renderable slot of the wrapped deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckSlotItem {
    /// Render key; clone slots get prefixed ids so list diffing never sees
    /// duplicates.
    pub slot_id: String,
    /// `lead_clone | real | trail_clone`.
    pub kind: String,
    pub title: String,
    pub subtitle: String,
    pub color: String,
    pub image: Option<String>,
    pub route: Option<String>,
}

/// Response envelope for carousel session mutations.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselScrollResponse {
    /// Whether a live session handled the call.
    pub ok: bool,
    /// Offset after any boundary correction; the host must jump to it
    /// without animation when `teleported` is set.
    pub offset: f64,
    /// Wrapped index of the centered real card; `None` for an empty deck or
    /// before the initial centering.
    pub logical_index: Option<u32>,
    pub teleported: bool,
    /// Human-readable diagnostics.
    pub message: String,
}

/// Response envelope for mounting a carousel session.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselMountResponse {
    pub ok: bool,
    /// Distance between adjacent slot centers.
    pub pitch: f64,
    /// Total slots including sentinel clones (`0` for an empty deck).
    pub slot_count: u32,
    pub message: String,
}

/// Per-card visual state for one scroll position.
#[derive(Debug, Clone, PartialEq)]
pub struct CardVisualResponse {
    pub ok: bool,
    pub scale: f64,
    pub opacity: f64,
    pub message: String,
}

/// One pagination indicator dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DotItem {
    pub index: u32,
    pub active: bool,
}

/// Builds the wrapped slot sequence for the host list renderer.
///
/// # FFI contract
/// - Sync call, pure computation.
/// - Never panics; an empty input yields an empty deck.
#[flutter_rust_bridge::frb(sync)]
pub fn deck_build(cards: Vec<CardInput>) -> Vec<DeckSlotItem> {
    let cards = cards.into_iter().map(to_core_card).collect::<Vec<_>>();
    Deck::build(&cards)
        .slots()
        .iter()
        .map(|slot| DeckSlotItem {
            slot_id: slot.slot_id.clone(),
            kind: slot_kind_label(slot.kind).to_string(),
            title: slot.card.title.clone(),
            subtitle: slot.card.subtitle.clone(),
            color: slot.card.color.clone(),
            image: slot.card.image_ref.clone(),
            route: slot.card.route_name.clone(),
        })
        .collect()
}

/// Mounts a carousel session, replacing any previous one.
///
/// The initial centering is left pending; the host fires it via
/// [`carousel_initial_center`] before first paint or cancels it by
/// unmounting.
///
/// # FFI contract
/// - Sync call, pure computation plus session-state write.
/// - Never panics; rejects degenerate layouts via the envelope.
#[flutter_rust_bridge::frb(sync)]
pub fn carousel_mount(real_count: u32, card_width: f64, spacing: f64) -> CarouselMountResponse {
    let layout = CarouselLayout {
        card_width,
        spacing,
    };
    match ScrollController::new(real_count as usize, layout) {
        Ok(controller) => {
            let response = CarouselMountResponse {
                ok: true,
                pitch: controller.pitch(),
                slot_count: controller.slot_count() as u32,
                message: String::new(),
            };
            info!(
                "event=carousel_mount module=ffi status=ok real_count={real_count} pitch={}",
                controller.pitch()
            );
            *session() = Some(controller);
            response
        }
        Err(err) => CarouselMountResponse {
            ok: false,
            pitch: 0.0,
            slot_count: 0,
            message: format!("carousel_mount failed: {err}"),
        },
    }
}

/// Fires the one-shot initial centering onto the first real card.
///
/// # FFI contract
/// - Sync call; at most one successful invocation per mount.
/// - Never panics; returns `ok=false` when nothing is pending.
#[flutter_rust_bridge::frb(sync)]
pub fn carousel_initial_center() -> CarouselScrollResponse {
    let mut guard = session();
    match guard.as_mut().and_then(ScrollController::fire_initial_center) {
        Some(offset) => CarouselScrollResponse {
            ok: true,
            offset,
            logical_index: Some(0),
            teleported: false,
            message: String::new(),
        },
        None => no_session_response("no pending initial centering"),
    }
}

/// Handles a continuous scroll tick from the host scroll surface.
///
/// # FFI contract
/// - Sync call, pure arithmetic; safe on the frame path.
/// - Boundary corrections are reflected in the returned offset within the
///   same call, never deferred.
#[flutter_rust_bridge::frb(sync)]
pub fn carousel_scroll(offset: f64) -> CarouselScrollResponse {
    with_session(offset, |controller| controller.on_scroll(offset))
}

/// Handles the end of scroll momentum.
///
/// # FFI contract
/// - Sync call; idempotent for an already-corrected offset.
/// - Publishes the authoritative logical index.
#[flutter_rust_bridge::frb(sync)]
pub fn carousel_settle(offset: f64) -> CarouselScrollResponse {
    with_session(offset, |controller| controller.on_scroll_settle(offset))
}

/// Computes one slot's scale and opacity for the given scroll offset.
///
/// # FFI contract
/// - Sync call, pure and deterministic; callable per card per tick.
#[flutter_rust_bridge::frb(sync)]
pub fn carousel_visual(offset: f64, slot_index: u32) -> CardVisualResponse {
    match session().as_ref() {
        Some(controller) => {
            let visual = map_visual(offset, slot_index as usize, controller.pitch());
            CardVisualResponse {
                ok: true,
                scale: visual.scale,
                opacity: visual.opacity,
                message: String::new(),
            }
        }
        None => CardVisualResponse {
            ok: false,
            scale: 0.9,
            opacity: 1.0,
            message: "carousel not mounted".to_string(),
        },
    }
}

/// Renders the pagination dot row for the current session state.
///
/// # FFI contract
/// - Sync call; an unmounted or empty carousel yields zero dots.
#[flutter_rust_bridge::frb(sync)]
pub fn carousel_dots() -> Vec<DotItem> {
    match session().as_ref() {
        Some(controller) => dots(controller.real_count(), controller.logical_index())
            .into_iter()
            .map(|dot| DotItem {
                index: dot.index as u32,
                active: dot.active,
            })
            .collect(),
        None => Vec::new(),
    }
}

/// Tears down the carousel session, cancelling any pending centering.
///
/// # FFI contract
/// - Sync call; safe to call when no session exists.
#[flutter_rust_bridge::frb(sync)]
pub fn carousel_unmount() {
    let mut guard = session();
    if let Some(controller) = guard.as_mut() {
        controller.dispose();
    }
    *guard = None;
}

/// Journal entry crossing the boundary to the host list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryItem {
    pub entry_id: String,
    pub text: String,
    pub created_at_ms: i64,
    pub image: Option<String>,
}

/// Generic action response envelope for journal commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Optional created entry ID.
    pub entry_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl EntryActionResponse {
    fn success(message: impl Into<String>, entry_id: Option<String>) -> Self {
        Self {
            ok: true,
            entry_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            entry_id: None,
            message: message.into(),
        }
    }
}

/// List response envelope for the journal screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryListResponse {
    /// Entries newest first (empty on failure).
    pub items: Vec<EntryItem>,
    pub message: String,
}

/// Creates a journal entry from the compose flow.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; validation failures come back in the envelope.
#[flutter_rust_bridge::frb(sync)]
pub fn journal_add_entry(
    text: String,
    image: Option<String>,
    created_at_ms: i64,
) -> EntryActionResponse {
    match with_journal_service(|service| service.create_entry(&text, image, created_at_ms)) {
        Ok(id) => EntryActionResponse::success("Entry created.", Some(id.to_string())),
        Err(err) => EntryActionResponse::failure(format!("journal_add_entry failed: {err}")),
    }
}

/// Lists journal entries newest first.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; `limit` is capped to keep the response bounded.
#[flutter_rust_bridge::frb(sync)]
pub fn journal_list_entries(limit: Option<u32>) -> EntryListResponse {
    let capped = limit.map(|value| value.min(JOURNAL_LIST_LIMIT_MAX));
    match with_journal_service(|service| service.load_entries(capped)) {
        Ok(entries) => {
            let items = entries
                .into_iter()
                .map(|entry| EntryItem {
                    entry_id: entry.uuid.to_string(),
                    text: entry.text,
                    created_at_ms: entry.created_at,
                    image: entry.image,
                })
                .collect::<Vec<_>>();
            let message = format!("Loaded {} entry(ies).", items.len());
            EntryListResponse { items, message }
        }
        Err(err) => EntryListResponse {
            items: Vec::new(),
            message: format!("journal_list_entries failed: {err}"),
        },
    }
}

/// Deletes a journal entry permanently.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; unknown or malformed ids come back in the envelope.
#[flutter_rust_bridge::frb(sync)]
pub fn journal_delete_entry(entry_id: String) -> EntryActionResponse {
    let id = match Uuid::parse_str(entry_id.trim()) {
        Ok(id) => id,
        Err(_) => {
            return EntryActionResponse::failure(format!("invalid entry id `{entry_id}`"));
        }
    };
    match with_journal_service(|service| service.delete_entry(id)) {
        Ok(()) => EntryActionResponse::success("Entry deleted.", None),
        Err(err) => EntryActionResponse::failure(format!("journal_delete_entry failed: {err}")),
    }
}

fn session() -> MutexGuard<'static, Option<ScrollController>> {
    // A poisoned lock only means a host thread panicked mid-call; the
    // controller state itself stays valid.
    CAROUSEL.lock().unwrap_or_else(PoisonError::into_inner)
}

fn with_session(
    offset: f64,
    f: impl FnOnce(&mut ScrollController) -> loopdeck_core::ScrollOutcome,
) -> CarouselScrollResponse {
    let mut guard = session();
    match guard.as_mut() {
        Some(controller) => {
            let outcome = f(controller);
            CarouselScrollResponse {
                ok: true,
                offset: outcome.offset,
                logical_index: outcome.logical_index.map(|index| index as u32),
                teleported: outcome.teleported,
                message: String::new(),
            }
        }
        None => CarouselScrollResponse {
            offset,
            ..no_session_response("carousel not mounted")
        },
    }
}

fn no_session_response(message: &str) -> CarouselScrollResponse {
    CarouselScrollResponse {
        ok: false,
        offset: 0.0,
        logical_index: None,
        teleported: false,
        message: message.to_string(),
    }
}

fn to_core_card(input: CardInput) -> Card {
    Card {
        id: input.id,
        title: input.title,
        subtitle: input.subtitle,
        color: input.color,
        image_ref: input.image,
        route_name: input.route,
    }
}

fn slot_kind_label(kind: SlotKind) -> &'static str {
    match kind {
        SlotKind::LeadClone => "lead_clone",
        SlotKind::Real => "real",
        SlotKind::TrailClone => "trail_clone",
    }
}

fn resolve_journal_db_path() -> PathBuf {
    JOURNAL_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("LOOPDECK_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(JOURNAL_DB_FILE_NAME)
        })
        .clone()
}

fn with_journal_service<T>(
    f: impl FnOnce(&JournalService<SqliteEntryRepository<'_>>) -> loopdeck_core::RepoResult<T>,
) -> Result<T, String> {
    let db_path = resolve_journal_db_path();
    let conn = open_db(&db_path).map_err(|err| format!("journal DB open failed: {err}"))?;
    let service = JournalService::new(SqliteEntryRepository::new(&conn));
    f(&service).map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::{
        carousel_dots, carousel_initial_center, carousel_mount, carousel_scroll, carousel_settle,
        carousel_unmount, carousel_visual, core_version, deck_build, init_logging,
        journal_add_entry, journal_delete_entry, journal_list_entries, ping, CardInput,
    };
    use loopdeck_core::db::open_db;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn sample_cards(n: usize) -> Vec<CardInput> {
        (0..n)
            .map(|i| CardInput {
                id: format!("card-{i}"),
                title: format!("Title {i}"),
                subtitle: format!("Subtitle {i}"),
                color: "#13d6b2".to_string(),
                image: None,
                route: Some(format!("Route{i}")),
            })
            .collect()
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn deck_build_wraps_with_clone_slots() {
        let slots = deck_build(sample_cards(6));

        assert_eq!(slots.len(), 8);
        assert_eq!(slots[0].kind, "lead_clone");
        assert_eq!(slots[0].slot_id, "pre-card-5");
        assert_eq!(slots[0].title, "Title 5");
        assert_eq!(slots[7].kind, "trail_clone");
        assert_eq!(slots[7].slot_id, "post-card-0");
        assert_eq!(slots[7].title, "Title 0");
        assert!(slots[1..7].iter().all(|slot| slot.kind == "real"));
    }

    #[test]
    fn deck_build_of_nothing_is_empty() {
        assert!(deck_build(Vec::new()).is_empty());
    }

    // The carousel session is process-global, so its whole lifecycle is
    // exercised in one sequential test to avoid cross-test interference.
    #[test]
    fn carousel_session_lifecycle() {
        let mount = carousel_mount(6, 180.0, 10.0);
        assert!(mount.ok, "{}", mount.message);
        assert_eq!(mount.pitch, 200.0);
        assert_eq!(mount.slot_count, 8);

        let centered = carousel_initial_center();
        assert!(centered.ok, "{}", centered.message);
        assert_eq!(centered.offset, 200.0);
        assert_eq!(centered.logical_index, Some(0));

        // Second centering attempt is rejected.
        assert!(!carousel_initial_center().ok);

        let mid = carousel_scroll(600.0);
        assert!(mid.ok);
        assert!(!mid.teleported);
        assert_eq!(mid.logical_index, Some(2));

        let visual = carousel_visual(600.0, 3);
        assert!(visual.ok);
        assert_eq!(visual.scale, 0.9);
        assert_eq!(visual.opacity, 1.0);

        let dots = carousel_dots();
        assert_eq!(dots.len(), 6);
        assert!(dots[2].active);
        assert_eq!(dots.iter().filter(|dot| dot.active).count(), 1);

        // Trail clone (slot 7) teleports back onto slot 1.
        let wrapped = carousel_scroll(1400.0);
        assert!(wrapped.teleported);
        assert_eq!(wrapped.offset, 200.0);
        assert_eq!(wrapped.logical_index, Some(0));

        // Settle on the lead clone corrects to slot 6 and is idempotent.
        let settled = carousel_settle(0.0);
        assert!(settled.teleported);
        assert_eq!(settled.offset, 1200.0);
        assert_eq!(settled.logical_index, Some(5));
        let again = carousel_settle(settled.offset);
        assert!(!again.teleported);
        assert_eq!(again.logical_index, Some(5));

        carousel_unmount();
        assert!(!carousel_scroll(200.0).ok);
        assert!(carousel_dots().is_empty());
    }

    #[test]
    fn journal_add_list_delete_roundtrip() {
        let token = unique_token("journal-roundtrip");
        let created = journal_add_entry(token.clone(), None, 1_700_000_000_000);
        assert!(created.ok, "{}", created.message);
        let created_id = created
            .entry_id
            .clone()
            .expect("created entry should return entry_id");

        let listed = journal_list_entries(None);
        assert!(listed
            .items
            .iter()
            .any(|item| item.entry_id == created_id && item.text == token));

        let conn = open_db(super::resolve_journal_db_path()).expect("open db");
        let stored_text: String = conn
            .query_row(
                "SELECT text FROM entries WHERE uuid = ?1",
                [created_id.as_str()],
                |row| row.get(0),
            )
            .expect("query entry row");
        assert_eq!(stored_text, token);

        let deleted = journal_delete_entry(created_id.clone());
        assert!(deleted.ok, "{}", deleted.message);

        let relisted = journal_list_entries(None);
        assert!(relisted.items.iter().all(|item| item.entry_id != created_id));
    }

    #[test]
    fn journal_add_entry_rejects_empty_input() {
        let response = journal_add_entry("   ".to_string(), None, 1_700_000_000_000);
        assert!(!response.ok);
        assert!(response.message.contains("text or an image"));
    }

    #[test]
    fn journal_delete_entry_rejects_malformed_id() {
        let response = journal_delete_entry("not-a-uuid".to_string());
        assert!(!response.ok);
        assert!(response.message.contains("invalid entry id"));
    }

    fn unique_token(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{prefix}-{nanos}")
    }
}
