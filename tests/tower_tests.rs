//! Tests for the public Tower API
//!
//! These tests drive towers the way a game would:
//! - Start peg layout and the top-of-stack query
//! - Moving disks between towers (remove, then add)
//! - Rejected moves leaving both towers untouched

use hanoi_peg::{Disk, Level, StackingRule, TopOfStack, Tower, TowerError};

fn sizes(tower: &Tower) -> Vec<u8> {
    tower.disks().map(|disk| disk.size()).collect()
}

/// Move the top disk of `from` onto `to`, putting it back if `to` refuses it
fn move_disk(from: &mut Tower, to: &mut Tower) -> Result<(), TowerError> {
    let disk = from.remove_disk()?;
    if let Err(e) = to.add_disk(disk) {
        from.add_disk(disk).expect("disk came from this tower");
        return Err(e);
    }
    Ok(())
}

// =============================================================================
// Start Peg Scenario
// =============================================================================

#[test]
fn test_difficulty_three_scenario() {
    let mut tower = Tower::start_peg(3).unwrap();
    assert_eq!(tower.level(1), Some(Level::Disk(Disk::new(3).unwrap())));
    assert_eq!(tower.level(2), Some(Level::Disk(Disk::new(2).unwrap())));
    assert_eq!(tower.level(3), Some(Level::Disk(Disk::new(1).unwrap())));

    let removed = tower.remove_disk().unwrap();
    assert_eq!(removed.size(), 1);
    assert_eq!(sizes(&tower), vec![3, 2]);
    assert_eq!(tower.level(3), Some(Level::Empty));

    let before = tower.clone();
    assert_eq!(
        tower.add_disk(Disk::new(2).unwrap()),
        Err(TowerError::IllegalPlacement { incoming: 2, top: 2 })
    );
    assert_eq!(tower, before);
}

#[test]
fn test_start_peg_every_difficulty() {
    for difficulty in 0..=hanoi_peg::MAX_DIFFICULTY {
        let tower = Tower::start_peg(difficulty).unwrap();
        assert_eq!(tower.level_count(), usize::from(difficulty) + 2);
        assert_eq!(
            tower.highest_empty_level(),
            TopOfStack::Vacant(usize::from(difficulty) + 1)
        );
        let expected: Vec<u8> = (1..=difficulty).rev().collect();
        assert_eq!(sizes(&tower), expected);
    }
}

// =============================================================================
// Multi-Tower Moves
// =============================================================================

#[test]
fn test_solve_three_disks() {
    let mut a = Tower::start_peg(3).unwrap();
    let mut b = Tower::new(3).unwrap();
    let mut c = Tower::new(3).unwrap();

    // Classic seven-move solution moving everything from a to c
    move_disk(&mut a, &mut c).unwrap();
    move_disk(&mut a, &mut b).unwrap();
    move_disk(&mut c, &mut b).unwrap();
    move_disk(&mut a, &mut c).unwrap();
    move_disk(&mut b, &mut a).unwrap();
    move_disk(&mut b, &mut c).unwrap();
    move_disk(&mut a, &mut c).unwrap();

    assert!(a.is_empty());
    assert!(b.is_empty());
    assert_eq!(sizes(&c), vec![3, 2, 1]);
    assert_eq!(c.render(), Tower::start_peg(3).unwrap().render());
}

#[test]
fn test_rejected_move_keeps_both_towers() {
    let mut a = Tower::start_peg(3).unwrap();
    let mut b = Tower::new(3).unwrap();
    move_disk(&mut a, &mut b).unwrap();

    let (a_before, b_before) = (a.clone(), b.clone());
    assert_eq!(
        move_disk(&mut a, &mut b),
        Err(TowerError::IllegalPlacement { incoming: 2, top: 1 })
    );
    assert_eq!(a, a_before);
    assert_eq!(b, b_before);
}

#[test]
fn test_move_from_empty_tower() {
    let mut a = Tower::new(2).unwrap();
    let mut b = Tower::start_peg(2).unwrap();
    assert_eq!(move_disk(&mut a, &mut b), Err(TowerError::EmptyTower));
    assert_eq!(sizes(&b), vec![2, 1]);
}

#[test]
fn test_lenient_rule_allows_equal_sizes() {
    let mut tower = Tower::with_rule(2, StackingRule::Lenient).unwrap();
    let disk = Disk::new(2).unwrap();
    tower.add_disk(disk).unwrap();
    tower.add_disk(disk).unwrap();
    tower.add_disk(disk).unwrap();
    assert_eq!(tower.highest_empty_level(), TopOfStack::Full);
    assert_eq!(
        tower.add_disk(Disk::new(1).unwrap()),
        Err(TowerError::TowerFull { capacity: 3 })
    );
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_render_line_shape() {
    let tower = Tower::start_peg(4).unwrap();
    let image = tower.render();

    assert!(image.starts_with('\n'));
    let lines: Vec<&str> = image[1..].lines().collect();
    assert_eq!(lines.len(), tower.level_count());
    for line in &lines {
        assert_eq!(line.chars().count(), hanoi_peg::GLYPH_WIDTH);
    }
    assert_eq!(lines.first(), Some(&Level::Empty.glyph()));
    assert_eq!(lines.last(), Some(&Level::Base.glyph()));
}
