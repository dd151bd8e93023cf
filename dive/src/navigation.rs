//! Replaying a command list into a final position
//!
//! Two steering models share the same input:
//!
//! - [`Course`] moves depth directly on `down`/`up`
//! - [`AimedCourse`] turns `down`/`up` into aim, and `forward` dives at that aim
//!
//! Both start at the surface with everything zeroed and never mutate the
//! commands they are given. All arithmetic is checked; a total that leaves
//! the `i64` range is a [`NavigationError`], never a wrapped value.

use crate::command::{Command, Direction};
use crate::error::NavigationError;

/// Horizontal position and depth
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    pub x: i64,
    pub depth: i64,
}

impl Position {
    /// The puzzle answer: horizontal position multiplied by depth
    pub fn product(&self) -> Result<i64, NavigationError> {
        self.x.checked_mul(self.depth).ok_or(NavigationError::ProductOverflow {
            x: self.x,
            depth: self.depth,
        })
    }
}

/// A steering model that accumulates commands in order
pub trait Navigator: Default {
    /// Apply one command; `None` if any total would overflow
    fn steer(&mut self, command: &Command) -> Option<()>;

    fn position(&self) -> Position;
}

/// Part 1 rules: `down`/`up` change depth directly
#[derive(Debug, Clone, Copy, Default)]
pub struct Course {
    position: Position,
}

impl Navigator for Course {
    fn steer(&mut self, command: &Command) -> Option<()> {
        let n = i64::from(command.amount);
        let pos = &mut self.position;
        match command.direction {
            Direction::Forward => pos.x = pos.x.checked_add(n)?,
            Direction::Down => pos.depth = pos.depth.checked_add(n)?,
            Direction::Up => pos.depth = pos.depth.checked_sub(n)?,
        }
        Some(())
    }

    fn position(&self) -> Position {
        self.position
    }
}

/// Part 2 rules: `down`/`up` change aim, `forward` moves and dives by `aim * n`
#[derive(Debug, Clone, Copy, Default)]
pub struct AimedCourse {
    position: Position,
    aim: i64,
}

impl AimedCourse {
    pub fn aim(&self) -> i64 {
        self.aim
    }
}

impl Navigator for AimedCourse {
    fn steer(&mut self, command: &Command) -> Option<()> {
        let n = i64::from(command.amount);
        match command.direction {
            Direction::Forward => {
                // commit nothing until both totals are known to fit
                let x = self.position.x.checked_add(n)?;
                let depth = self.position.depth.checked_add(self.aim.checked_mul(n)?)?;
                self.position = Position { x, depth };
            }
            Direction::Down => self.aim = self.aim.checked_add(n)?,
            Direction::Up => self.aim = self.aim.checked_sub(n)?,
        }
        Some(())
    }

    fn position(&self) -> Position {
        self.position
    }
}

/// Run every command through a fresh navigator and return where it ends up
pub fn navigate<N: Navigator>(commands: &[Command]) -> Result<Position, NavigationError> {
    let mut nav = N::default();
    for (idx, cmd) in commands.iter().enumerate() {
        nav.steer(cmd).ok_or(NavigationError::Overflow {
            step: idx + 1,
            command: *cmd,
        })?;
    }
    Ok(nav.position())
}

pub fn part1(commands: &[Command]) -> Result<i64, NavigationError> {
    navigate::<Course>(commands)?.product()
}

pub fn part2(commands: &[Command]) -> Result<i64, NavigationError> {
    navigate::<AimedCourse>(commands)?.product()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{DirectionPolicy, parse_commands};
    use proptest::prelude::*;

    fn example() -> Vec<Command> {
        vec![
            Command::new(Direction::Forward, 5),
            Command::new(Direction::Down, 5),
            Command::new(Direction::Forward, 8),
            Command::new(Direction::Up, 3),
            Command::new(Direction::Down, 8),
            Command::new(Direction::Forward, 2),
        ]
    }

    #[test]
    fn test_part1_example() {
        let commands = example();
        assert_eq!(navigate::<Course>(&commands), Ok(Position { x: 15, depth: 10 }));
        assert_eq!(part1(&commands), Ok(150));
    }

    #[test]
    fn test_part2_example() {
        let commands = example();
        assert_eq!(navigate::<AimedCourse>(&commands), Ok(Position { x: 15, depth: 60 }));
        assert_eq!(part2(&commands), Ok(900));
    }

    #[test]
    fn test_empty_course_stays_at_surface() {
        assert_eq!(part1(&[]), Ok(0));
        assert_eq!(part2(&[]), Ok(0));
    }

    #[test]
    fn test_aim_tracks_down_and_up() {
        let mut nav = AimedCourse::default();
        nav.steer(&Command::new(Direction::Down, 5)).unwrap();
        nav.steer(&Command::new(Direction::Up, 7)).unwrap();
        assert_eq!(nav.aim(), -2);
        assert_eq!(nav.position(), Position::default());

        // negative aim climbs
        nav.steer(&Command::new(Direction::Forward, 3)).unwrap();
        assert_eq!(nav.position(), Position { x: 3, depth: -6 });
    }

    #[test]
    fn test_up_can_go_above_surface() {
        let commands = [Command::new(Direction::Forward, 4), Command::new(Direction::Up, 2)];
        assert_eq!(part1(&commands), Ok(-8));
    }

    #[test]
    fn test_order_matters() {
        let mut reversed = example();
        reversed.reverse();

        // part 1 only sums, so reversal keeps its answer
        assert_eq!(part1(&reversed), part1(&example()));
        assert_ne!(part2(&reversed), part2(&example()));
    }

    #[test]
    fn test_large_amounts_fit() {
        let commands = [
            Command::new(Direction::Down, u32::MAX),
            Command::new(Direction::Forward, 2),
        ];
        assert_eq!(part2(&commands), Ok(2 * 2 * i64::from(u32::MAX)));
    }

    #[test]
    fn test_aimed_dive_overflow_is_an_error() {
        let commands = parse_commands("down 4294967295\nforward 4294967295\n", DirectionPolicy::Reject).unwrap();

        assert_eq!(
            part2(&commands),
            Err(NavigationError::Overflow {
                step: 2,
                command: Command::new(Direction::Forward, u32::MAX),
            })
        );
        // part 1 sums fine but its product does not
        let max = i64::from(u32::MAX);
        assert_eq!(part1(&commands), Err(NavigationError::ProductOverflow { x: max, depth: max }));
    }

    #[test]
    fn test_product_overflow_is_an_error() {
        let commands = "forward 4294967295\ndown 4294967295\n".repeat(3);
        let commands = parse_commands(&commands, DirectionPolicy::Reject).unwrap();

        let max = 3 * i64::from(u32::MAX);
        assert_eq!(navigate::<Course>(&commands), Ok(Position { x: max, depth: max }));
        assert_eq!(
            part1(&commands),
            Err(NavigationError::ProductOverflow { x: max, depth: max })
        );
    }

    #[test]
    fn test_failed_steer_leaves_position_untouched() {
        let mut nav = AimedCourse::default();
        nav.steer(&Command::new(Direction::Down, u32::MAX)).unwrap();
        nav.steer(&Command::new(Direction::Forward, 1)).unwrap();
        let before = nav.position();
        assert_eq!(before, Position { x: 1, depth: i64::from(u32::MAX) });

        assert!(nav.steer(&Command::new(Direction::Forward, u32::MAX)).is_none());
        assert_eq!(nav.position(), before);
    }

    fn any_commands() -> impl Strategy<Value = Vec<Command>> {
        let cmd = (prop::sample::select(Direction::ALL.to_vec()), 0u32..1000)
            .prop_map(|(direction, amount)| Command::new(direction, amount));
        prop::collection::vec(cmd, 0..64)
    }

    proptest! {
        #[test]
        fn test_reductions_are_pure(commands in any_commands()) {
            let before = commands.clone();
            prop_assert_eq!(part1(&commands), part1(&commands));
            prop_assert_eq!(part2(&commands), part2(&commands));
            prop_assert_eq!(commands, before);
        }

        #[test]
        fn test_passes_agree_on_horizontal_position(commands in any_commands()) {
            prop_assert_eq!(
                navigate::<Course>(&commands).map(|p| p.x),
                navigate::<AimedCourse>(&commands).map(|p| p.x)
            );
        }
    }
}
