//! Occupancy view model
//!
//! While mounted, a single background task applies the simulated update to
//! the board once per period. Unmounting (or dropping the view) stops the
//! task; nothing writes to the board after that.

use std::time::Duration;

use campus_core::invariants::{assert_classroom_invariants, assert_maintenance_untouched};
use campus_core::{
    BuildingFilter, OccupancyBoard, OccupancyLevel, OccupancyStatus, OccupancySummary,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::config::OccupancyConfig;
use crate::error::Result;

/// Board contents plus how many ticks produced them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancySnapshot {
    pub board: OccupancyBoard,
    pub ticks: u64,
}

/// Handle on the running tick task
struct Ticker {
    handle: JoinHandle<()>,
    shutdown_tx: broadcast::Sender<()>,
}

pub struct OccupancyView {
    board_tx: watch::Sender<OccupancySnapshot>,
    filter: BuildingFilter,
    period: Duration,
    seed: Option<u64>,
    ticker: Option<Ticker>,
}

impl OccupancyView {
    pub fn new(board: OccupancyBoard, config: &OccupancyConfig) -> Self {
        let (board_tx, _) = watch::channel(OccupancySnapshot { board, ticks: 0 });
        Self {
            board_tx,
            filter: BuildingFilter::parse(&config.building),
            period: config.tick_period(),
            seed: config.seed,
            ticker: None,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.ticker.is_some()
    }

    /// Start ticking. Mounting an already mounted view does nothing.
    /// Must be called from within a tokio runtime.
    pub fn mount(&mut self) {
        if self.ticker.is_some() {
            return;
        }

        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
        let handle = tokio::spawn(tick_task(
            self.board_tx.clone(),
            self.period,
            rng,
            shutdown_rx,
        ));

        tracing::info!(period_secs = self.period.as_secs_f64(), "Occupancy view mounted");
        self.ticker = Some(Ticker {
            handle,
            shutdown_tx,
        });
    }

    /// Stop ticking and wait for the task to finish
    pub async fn unmount(&mut self) {
        let Some(ticker) = self.ticker.take() else {
            return;
        };
        let _ = ticker.shutdown_tx.send(());
        if let Err(e) = ticker.handle.await {
            if !e.is_cancelled() {
                tracing::warn!(error = %e, "Occupancy ticker ended abnormally");
            }
        }
        tracing::info!("Occupancy view unmounted");
    }

    pub fn set_filter(&mut self, filter: BuildingFilter) {
        self.filter = filter;
    }

    /// Receiver notified after every tick
    pub fn subscribe(&self) -> watch::Receiver<OccupancySnapshot> {
        self.board_tx.subscribe()
    }

    pub fn snapshot(&self) -> OccupancySnapshot {
        self.board_tx.borrow().clone()
    }

    pub fn ticks(&self) -> u64 {
        self.board_tx.borrow().ticks
    }

    /// Derived display data for the current board
    pub fn render(&self) -> Result<OccupancyPanel> {
        OccupancyPanel::build(&self.snapshot(), &self.filter)
    }
}

impl Drop for OccupancyView {
    fn drop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.handle.abort();
        }
    }
}

async fn tick_task(
    board_tx: watch::Sender<OccupancySnapshot>,
    period: Duration,
    mut rng: StdRng,
    mut shutdown_rx: broadcast::Receiver<()>,
) {
    // First update one full period after mount; late ticks are dropped, not replayed.
    let mut interval = tokio::time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                board_tx.send_modify(|snapshot| {
                    let next = snapshot.board.tick(&mut rng);
                    for (before, after) in snapshot.board.rooms().iter().zip(next.rooms()) {
                        assert_classroom_invariants(after);
                        assert_maintenance_untouched(before, after);
                    }
                    snapshot.board = next;
                    snapshot.ticks += 1;
                    tracing::debug!(tick = snapshot.ticks, "Occupancy updated");
                });
            }
            _ = shutdown_rx.recv() => {
                tracing::debug!("Occupancy ticker shutting down");
                break;
            }
        }
    }
}

/// One room card on the occupancy view
#[derive(Debug, Clone, Serialize)]
pub struct RoomCard {
    pub id: String,
    pub name: String,
    pub building: String,
    pub current: u32,
    pub capacity: u32,
    pub percentage: u8,
    pub status: OccupancyStatus,
    pub level: OccupancyLevel,
    pub equipment: Vec<String>,
}

/// Everything the occupancy page shows
#[derive(Debug, Clone, Serialize)]
pub struct OccupancyPanel {
    pub ticks: u64,
    pub summary: OccupancySummary,
    pub buildings: Vec<String>,
    pub rooms: Vec<RoomCard>,
}

impl OccupancyPanel {
    pub fn build(snapshot: &OccupancySnapshot, filter: &BuildingFilter) -> Result<Self> {
        let board = &snapshot.board;
        let rooms = board
            .readings(filter)?
            .into_iter()
            .map(|(room, reading)| RoomCard {
                id: room.id.clone(),
                name: room.name.clone(),
                building: room.building.clone(),
                current: room.current_occupancy,
                capacity: room.capacity,
                percentage: reading.percentage,
                status: reading.status,
                level: reading.level,
                equipment: room.equipment.iter().cloned().collect(),
            })
            .collect();

        Ok(Self {
            ticks: snapshot.ticks,
            summary: board.summary(),
            buildings: board.buildings().into_iter().map(String::from).collect(),
            rooms,
        })
    }
}

impl std::fmt::Display for OccupancyPanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Classroom occupancy (tick {}): {} rooms, {} available, {} occupied, {} maintenance",
            self.ticks,
            self.summary.total,
            self.summary.available,
            self.summary.occupied,
            self.summary.maintenance
        )?;
        if self.rooms.is_empty() {
            writeln!(f, "  No classrooms found for the selected building.")?;
        }
        for room in &self.rooms {
            writeln!(
                f,
                "  {:<10} {:<22} {:>3}/{:<3} ({:>3}%) {}",
                room.name, room.building, room.current, room.capacity, room.percentage, room.status
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::Fixtures;

    fn config(seed: u64) -> OccupancyConfig {
        OccupancyConfig {
            seed: Some(seed),
            ..Default::default()
        }
    }

    fn view(seed: u64) -> OccupancyView {
        OccupancyView::new(Fixtures::seed().occupancy_board(), &config(seed))
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_ticks_until_mounted() {
        let view = view(1);
        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(view.ticks(), 0);
        assert!(!view.is_mounted());
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_once_per_period() {
        let mut view = view(2);
        let mut rx = view.subscribe();
        let start = Instant::now();

        view.mount();
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().ticks, 1);
        assert_eq!(start.elapsed(), Duration::from_secs(10));

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().ticks, 2);
        assert_eq!(start.elapsed(), Duration::from_secs(20));

        view.unmount().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_updates_after_unmount() {
        let mut view = view(3);
        let mut rx = view.subscribe();
        view.mount();
        rx.changed().await.unwrap();

        view.unmount().await;
        let frozen = view.snapshot();
        tokio::time::sleep(Duration::from_secs(300)).await;

        assert_eq!(view.snapshot(), frozen);
        assert!(!view.is_mounted());
    }

    #[tokio::test(start_paused = true)]
    async fn test_double_mount_keeps_one_timer() {
        let mut view = view(4);
        let mut rx = view.subscribe();
        view.mount();
        view.mount();

        tokio::time::sleep(Duration::from_secs(35)).await;
        assert_eq!(rx.borrow_and_update().ticks, 3);
        view.unmount().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_missed_ticks_are_skipped() {
        let mut view = view(10);
        let mut rx = view.subscribe();
        let start = Instant::now();

        view.mount();
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().ticks, 1);

        // Jump past three deadlines (20s, 30s, 40s) without letting the ticker run.
        tokio::time::advance(Duration::from_secs(35)).await;
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().ticks, 2);
        assert_eq!(start.elapsed(), Duration::from_secs(45));

        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        assert_eq!(view.ticks(), 2);

        // Schedule realigns to the original grid.
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().ticks, 3);
        assert_eq!(start.elapsed(), Duration::from_secs(50));

        view.unmount().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_remount_resumes_from_last_board() {
        let mut view = view(5);
        let mut rx = view.subscribe();
        view.mount();
        rx.changed().await.unwrap();
        view.unmount().await;

        view.mount();
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().ticks, 2);
        view.unmount().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_maintenance_room_never_moves() {
        let mut view = view(6);
        let mut rx = view.subscribe();
        let lab = view.snapshot().board.get("4").cloned().unwrap();

        view.mount();
        for _ in 0..20 {
            rx.changed().await.unwrap();
            assert_eq!(rx.borrow_and_update().board.get("4"), Some(&lab));
        }
        view.unmount().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_view_stops_ticker() {
        let mut view = view(7);
        let mut rx = view.subscribe();
        view.mount();
        rx.changed().await.unwrap();

        drop(view);
        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(rx.borrow().ticks, 1);
        assert!(rx.changed().await.is_err());
    }

    #[test]
    fn test_panel_for_seed_board() {
        let view = view(8);
        let panel = view.render().unwrap();

        assert_eq!(panel.summary.total, 4);
        assert_eq!(panel.buildings.len(), 4);

        let statuses: Vec<_> = panel.rooms.iter().map(|r| r.status).collect();
        assert_eq!(
            statuses,
            vec![
                OccupancyStatus::Occupied,
                OccupancyStatus::Available,
                OccupancyStatus::Full,
                OccupancyStatus::Maintenance,
            ]
        );
        assert_eq!(panel.rooms[0].percentage, 84);
    }

    #[test]
    fn test_panel_filter() {
        let mut view = view(9);
        view.set_filter(BuildingFilter::parse("Nowhere"));
        let panel = view.render().unwrap();
        assert!(panel.rooms.is_empty());
        assert_eq!(panel.summary.total, 4);
        assert!(panel.to_string().contains("No classrooms found"));
    }
}
