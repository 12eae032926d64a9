use rand::rngs::StdRng;

/// A grid cell, in columns and rows rather than pixels.
#[derive(Clone, Copy, Hash, PartialEq, Eq, Default, Debug)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}
impl Coord {
    pub fn add(self, rhs: Dir) -> Coord {
        let (dx, dy) = rhs.get_diff();
        Coord { x: self.x + dx, y: self.y + dy }
    }
    pub fn in_bounds(&self, cols: i32, rows: i32) -> bool {
        (0..cols).contains(&self.x) && (0..rows).contains(&self.y)
    }
}
impl From<(i32, i32)> for Coord {
    fn from(value: (i32, i32)) -> Self {
        Coord { x: value.0, y: value.1 }
    }
}

#[derive(Clone, Copy, Hash, PartialEq, Eq, Debug)]
pub enum Dir {
    Up, Left, Down, Right
}
impl Dir {
    fn get_diff(&self) -> (i32, i32) {
        [(0, -1), (-1, 0), (0, 1), (1, 0)][*self as usize]
    }
    pub fn is_opposite(&self, other: Dir) -> bool {
        (*self as usize).abs_diff(other as usize) == 2
    }
}

/// Head at index 0. The slot at `len` keeps the cell the tail left on the
/// last move, so growing by one reuses it.
#[derive(Debug)]
pub struct Snake {
    body: Box<[Coord]>,
    len: usize,
    dir: Dir,
}
impl Snake {
    /// `capacity` is the number of cells on the board.
    pub fn new(start: impl Into<Coord>, dir: Dir, len: usize, capacity: usize) -> Snake {
        let len = len.clamp(1, capacity);
        Snake {
            body: vec![start.into(); capacity + 1].into_boxed_slice(),
            len,
            dir,
        }
    }

    /// Shifts every segment onto its predecessor, tail first, then steps the
    /// head in the current direction.
    pub fn advance(&mut self) {
        for i in (1..=self.len).rev() {
            self.body[i] = self.body[i - 1];
        }
        self.body[0] = self.body[0].add(self.dir);
    }

    /// Returns false when the snake already fills the board.
    pub fn grow(&mut self) -> bool {
        if self.len + 1 >= self.body.len() {
            return false;
        }
        self.len += 1;
        true
    }

    /// Turns towards `dir` unless it is the reverse of the current direction.
    pub fn point(&mut self, dir: Dir) -> bool {
        if dir.is_opposite(self.dir) {
            return false;
        }
        self.dir = dir;
        true
    }

    pub fn len(&self) -> usize {
        self.len
    }
    pub fn dir(&self) -> Dir {
        self.dir
    }
    pub fn head_pos(&self) -> Coord {
        self.body[0]
    }
    pub fn segments(&self) -> &[Coord] {
        &self.body[..self.len]
    }
    pub fn contains(&self, coord: Coord) -> bool {
        self.segments().contains(&coord)
    }
    pub fn hits_self(&self) -> bool {
        let head = self.head_pos();
        self.segments()[1..].contains(&head)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UserAction {
    Up,
    Left,
    Down,
    Right,
    Restart,
    Quit,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Collision {
    Wall,
    Body,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TickOutcome {
    /// Round is over, nothing moved
    Idle,
    Moved,
    Ate,
    Collided(Collision),
}

pub struct GameState {
    pub cols: i32,
    pub rows: i32,
    /// Cells on the board, `cols * rows`
    pub units: usize,
    pub snake: Snake,
    pub food: Coord,
    pub score: usize,
    pub running: bool,
    /// Length every round starts with
    pub initial_len: usize,
    pub rng: StdRng,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight_snake() -> Snake {
        // Lay out a horizontal snake heading right with its head at (4, 2).
        let mut snake = Snake::new((0, 2), Dir::Right, 1, 100);
        for _ in 0..4 {
            snake.advance();
            snake.grow();
        }
        snake
    }

    #[test]
    fn opposites() {
        assert!(Dir::Up.is_opposite(Dir::Down));
        assert!(Dir::Left.is_opposite(Dir::Right));
        assert!(!Dir::Up.is_opposite(Dir::Left));
        assert!(!Dir::Right.is_opposite(Dir::Right));
    }

    #[test]
    fn advance_preserves_body_order() {
        let mut snake = straight_snake();
        let before = snake.segments().to_vec();
        snake.advance();

        assert_eq!(snake.head_pos(), Coord { x: 5, y: 2 });
        assert_eq!(&snake.segments()[1..], &before[..before.len() - 1]);
    }

    #[test]
    fn grow_keeps_vacated_tail_cell() {
        let mut snake = straight_snake();
        let tail = *snake.segments().last().unwrap();
        snake.advance();
        assert!(snake.grow());
        assert_eq!(*snake.segments().last().unwrap(), tail);
    }

    #[test]
    fn grow_stops_at_capacity() {
        let mut snake = Snake::new((0, 0), Dir::Right, 3, 4);
        assert!(snake.grow());
        assert!(!snake.grow());
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn reverse_turn_is_rejected() {
        let mut snake = straight_snake();
        assert!(!snake.point(Dir::Left));
        assert_eq!(snake.dir(), Dir::Right);
        assert!(snake.point(Dir::Up));
        assert_eq!(snake.dir(), Dir::Up);
    }

    #[test]
    fn reverse_is_judged_against_current_direction() {
        let mut snake = Snake::new((5, 0), Dir::Down, 3, 100);
        snake.advance();

        // Right is now current, so Left reverses it even before the next move.
        assert!(snake.point(Dir::Right));
        assert!(!snake.point(Dir::Left));
        assert_eq!(snake.dir(), Dir::Right);

        // Up is not a reversal of Right, so a second turn in one tick is fine.
        assert!(snake.point(Dir::Up));
        assert!(snake.point(Dir::Left));
        assert_eq!(snake.dir(), Dir::Left);
    }

    #[test]
    fn bounds() {
        assert!(Coord { x: 0, y: 0 }.in_bounds(24, 24));
        assert!(Coord { x: 23, y: 23 }.in_bounds(24, 24));
        assert!(!Coord { x: -1, y: 0 }.in_bounds(24, 24));
        assert!(!Coord { x: 0, y: 24 }.in_bounds(24, 24));
    }
}
