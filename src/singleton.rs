// Pattern 4: Singleton
// `Building` and `Elevator` are constructed at most once per `Premises`. The
// process-wide accessors go through one `static Premises`, so racing first
// calls still construct exactly once (`OnceLock`), and every later call gets
// the original instance whatever arguments it passes.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::OnceLock;

use itertools::Itertools;
use tracing::{error, info, warn};

use crate::error::ElevatorError;

pub const DEFAULT_FLOORS: u32 = 10;
pub const DEFAULT_ROOMS_PER_FLOOR: u32 = 5;
pub const DEFAULT_MAX_FLOORS: u32 = 10;

static PREMISES: Premises = Premises::new();

// ============================================================================
// Rooms and floors
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    number: u64,
}

impl Room {
    pub fn number(&self) -> u64 {
        self.number
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Floor {
    number: u32,
    rooms: Vec<Room>,
}

impl Floor {
    /// Rooms on floor `n` are numbered `n01`, `n02`, ...
    ///
    /// Numbers are `u64`: `n * 100 + i` cannot overflow for any `u32` inputs.
    pub fn new(number: u32, rooms_per_floor: u32) -> Self {
        let rooms = (1..=rooms_per_floor)
            .map(|i| Room {
                number: u64::from(number) * 100 + u64::from(i),
            })
            .collect();
        Self { number, rooms }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn describe(&self) -> String {
        format!(
            "Floor {} has {} rooms: {}",
            self.number,
            self.rooms.len(),
            self.rooms.iter().map(Room::number).join(" ")
        )
    }
}

// ============================================================================
// Building
// ============================================================================

#[derive(Debug)]
pub struct Building {
    floors: Vec<Floor>,
    floors_count: u32,
    rooms_per_floor: u32,
}

impl Building {
    fn new(floors_count: u32, rooms_per_floor: u32) -> Self {
        info!(floors_count, rooms_per_floor, "constructing building");
        let floors = (1..=floors_count)
            .map(|number| Floor::new(number, rooms_per_floor))
            .collect();
        Self {
            floors,
            floors_count,
            rooms_per_floor,
        }
    }

    /// The process-wide building. Only the first call's arguments are used.
    pub fn get_instance(floors: u32, rooms_per_floor: u32) -> &'static Building {
        PREMISES.building(floors, rooms_per_floor)
    }

    pub fn get_default() -> &'static Building {
        Self::get_instance(DEFAULT_FLOORS, DEFAULT_ROOMS_PER_FLOOR)
    }

    /// The process-wide elevator, sized to this building if it does not
    /// exist yet.
    ///
    /// Always resolves through the global premises. A building owned by a
    /// private [`Premises`] must use [`Premises::elevator_for`] instead, or it
    /// would be handed (and could create) the global elevator.
    pub fn elevator(&self) -> &'static Elevator {
        Elevator::get_instance(self.floors_count)
    }

    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    pub fn floors_count(&self) -> u32 {
        self.floors_count
    }

    pub fn rooms_per_floor(&self) -> u32 {
        self.rooms_per_floor
    }

    pub fn total_rooms(&self) -> u64 {
        u64::from(self.floors_count) * u64::from(self.rooms_per_floor)
    }

    pub fn display_info(&self) {
        println!("=== BUILDING INFORMATION ===");
        println!("Floors: {}", self.floors_count);
        println!("Rooms per floor: {}", self.rooms_per_floor);
        println!("Total rooms: {}", self.total_rooms());
        for floor in &self.floors {
            println!("{}", floor.describe());
        }
    }
}

// ============================================================================
// Elevator
// ============================================================================

#[derive(Debug)]
pub struct Elevator {
    current_floor: AtomicU32,
    max_floors: u32,
}

impl Elevator {
    /// A `max_floors` of 0 is raised to 1 so the starting floor is always
    /// within `1..=max_floors`.
    fn new(max_floors: u32) -> Self {
        if max_floors == 0 {
            warn!("elevator needs at least one floor, using 1");
        }
        let max_floors = max_floors.max(1);
        info!(max_floors, "constructing elevator");
        Self {
            current_floor: AtomicU32::new(1),
            max_floors,
        }
    }

    pub fn get_instance(max_floors: u32) -> &'static Elevator {
        PREMISES.elevator(max_floors)
    }

    pub fn get_default() -> &'static Elevator {
        Self::get_instance(DEFAULT_MAX_FLOORS)
    }

    /// Moves to `floor` if it lies in `1..=max_floors`; otherwise the
    /// elevator stays where it is.
    pub fn move_to_floor(&self, floor: u32) -> Result<(), ElevatorError> {
        if !(1..=self.max_floors).contains(&floor) {
            error!(floor, max = self.max_floors, "invalid floor number");
            return Err(ElevatorError::FloorOutOfRange {
                floor,
                max: self.max_floors,
            });
        }

        self.current_floor.store(floor, Ordering::Release);
        println!("Elevator moved to floor {floor}");
        Ok(())
    }

    pub fn call_to_floor(&self, floor: u32) -> Result<(), ElevatorError> {
        println!("Elevator called to floor {floor}");
        self.move_to_floor(floor)
    }

    pub fn current_floor(&self) -> u32 {
        self.current_floor.load(Ordering::Acquire)
    }

    pub fn max_floors(&self) -> u32 {
        self.max_floors
    }

    pub fn display_status(&self) {
        println!("Elevator is on floor: {}", self.current_floor());
    }
}

// ============================================================================
// Premises: the context that owns both singletons
// ============================================================================

/// Holds at most one `Building` and one `Elevator`.
///
/// The global accessors use a single `static` instance; code that wants the
/// same construct-once behaviour without global state can own its own.
#[derive(Debug, Default)]
pub struct Premises {
    building: OnceLock<Building>,
    elevator: OnceLock<Elevator>,
}

impl Premises {
    pub const fn new() -> Self {
        Self {
            building: OnceLock::new(),
            elevator: OnceLock::new(),
        }
    }

    pub fn building(&self, floors: u32, rooms_per_floor: u32) -> &Building {
        self.building
            .get_or_init(|| Building::new(floors, rooms_per_floor))
    }

    pub fn elevator(&self, max_floors: u32) -> &Elevator {
        self.elevator.get_or_init(|| Elevator::new(max_floors))
    }

    pub fn elevator_for(&self, building: &Building) -> &Elevator {
        self.elevator(building.floors_count())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rayon::prelude::*;

    #[test]
    fn test_floor_room_numbers() {
        let floor = Floor::new(3, 4);
        let numbers: Vec<u64> = floor.rooms().iter().map(Room::number).collect();
        assert_eq!(numbers, vec![301, 302, 303, 304]);
        assert_eq!(floor.describe(), "Floor 3 has 4 rooms: 301 302 303 304");
    }

    #[test]
    fn test_building_layout() {
        let premises = Premises::new();
        let building = premises.building(5, 3);
        assert_eq!(building.floors_count(), 5);
        assert_eq!(building.rooms_per_floor(), 3);
        assert_eq!(building.total_rooms(), 15);
        assert_eq!(building.floors().len(), 5);
        assert_eq!(building.floors()[4].rooms()[2].number(), 503);
    }

    #[test]
    fn test_first_construction_wins() {
        let premises = Premises::new();
        let first = premises.building(5, 3);
        let second = premises.building(10, 5);
        assert!(std::ptr::eq(first, second));
        assert_eq!(second.floors_count(), 5);
        assert_eq!(second.rooms_per_floor(), 3);

        let elevator = premises.elevator_for(first);
        let again = premises.elevator(20);
        assert!(std::ptr::eq(elevator, again));
        assert_eq!(again.max_floors(), 5);
    }

    #[test]
    fn test_concurrent_first_calls_construct_once() {
        let premises = Premises::new();
        let results: Vec<(usize, u32)> = (1..=64u32)
            .into_par_iter()
            .map(|n| {
                let building = premises.building(n, n);
                (building as *const Building as usize, building.floors_count())
            })
            .collect();

        let (address, floors) = results[0];
        assert!(results.iter().all(|&r| r == (address, floors)));
        assert_eq!(premises.building(1000, 1).floors_count(), floors);
    }

    #[test]
    fn test_room_numbers_on_very_high_floor() {
        let floor = Floor::new(50_000_000, 2);
        assert_eq!(floor.rooms()[0].number(), 5_000_000_001);
        assert_eq!(floor.rooms()[1].number(), 5_000_000_002);
    }

    #[test]
    fn test_total_rooms_does_not_overflow() {
        let building = Building {
            floors: Vec::new(),
            floors_count: u32::MAX,
            rooms_per_floor: u32::MAX,
        };
        assert_eq!(
            building.total_rooms(),
            u64::from(u32::MAX) * u64::from(u32::MAX)
        );
    }

    #[test]
    fn test_private_building_gets_its_own_elevator() {
        let global = Elevator::get_instance(20);
        let premises = Premises::new();
        let building = premises.building(5, 3);
        let elevator = premises.elevator_for(building);

        assert_eq!(elevator.max_floors(), building.floors_count());
        assert!(!std::ptr::eq(elevator, global));
    }

    #[test]
    fn test_zero_floor_elevator_keeps_current_floor_in_range() {
        let premises = Premises::new();
        let elevator = premises.elevator(0);
        assert_eq!(elevator.max_floors(), 1);
        assert_eq!(elevator.current_floor(), 1);
        assert!(elevator.move_to_floor(0).is_err());
        assert!(elevator.move_to_floor(1).is_ok());
    }

    #[test]
    fn test_move_to_floor_bounds() {
        let premises = Premises::new();
        let elevator = premises.elevator(5);
        assert_eq!(elevator.current_floor(), 1);

        assert!(elevator.move_to_floor(3).is_ok());
        assert_eq!(elevator.current_floor(), 3);

        assert_eq!(
            elevator.move_to_floor(6),
            Err(ElevatorError::FloorOutOfRange { floor: 6, max: 5 })
        );
        assert_eq!(elevator.current_floor(), 3);

        assert!(elevator.move_to_floor(0).is_err());
        assert_eq!(elevator.current_floor(), 3);

        assert!(elevator.call_to_floor(5).is_ok());
        assert_eq!(elevator.current_floor(), 5);
    }

    proptest! {
        #[test]
        fn test_move_only_within_range(
            max in 1u32..50,
            moves in prop::collection::vec(0u32..60, 1..20),
        ) {
            let premises = Premises::new();
            let elevator = premises.elevator(max);
            for floor in moves {
                let before = elevator.current_floor();
                let result = elevator.move_to_floor(floor);
                if (1..=max).contains(&floor) {
                    prop_assert!(result.is_ok());
                    prop_assert_eq!(elevator.current_floor(), floor);
                } else {
                    prop_assert!(result.is_err());
                    prop_assert_eq!(elevator.current_floor(), before);
                }
            }
        }
    }
}
