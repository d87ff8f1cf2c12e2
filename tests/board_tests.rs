use flotilla::{Board, CellMark, Coord, GridError};

#[test]
fn test_mark_and_at() {
    let mut board = Board::new();
    let coord = Coord { row: 3, col: 4 };
    assert_eq!(board.at(coord).unwrap(), CellMark::Empty);
    assert!(board.is_clear(coord).unwrap());

    board.mark(coord, CellMark::Miss).unwrap();
    assert_eq!(board.at(coord).unwrap(), CellMark::Miss);
    assert!(!board.is_clear(coord).unwrap());

    board.mark(coord, CellMark::Hit).unwrap();
    assert_eq!(board.at(coord).unwrap(), CellMark::Hit);

    board.mark(coord, CellMark::Sunk('D')).unwrap();
    assert_eq!(board.at(coord).unwrap(), CellMark::Sunk('D'));
}

#[test]
fn test_out_of_range_is_the_only_failure() {
    let mut board = Board::new();
    assert_eq!(
        board.at(Coord { row: 10, col: 0 }).unwrap_err(),
        GridError::OutOfBounds { row: 10, col: 0 }
    );
    assert_eq!(
        board.mark(Coord { row: 0, col: 10 }, CellMark::Miss).unwrap_err(),
        GridError::OutOfBounds { row: 0, col: 10 }
    );
}

#[test]
fn test_render_empty_board() {
    let text = Board::new().to_string();
    let lines: Vec<&str> = text.split('\n').collect();

    assert_eq!(lines.len(), 13);
    assert_eq!(lines[0], "");
    assert_eq!(lines[1], "  A B C D E F G H I J");
    for row in 0..10 {
        let expected = format!("{}{}{}", row, " ".repeat(21), row);
        assert_eq!(lines[2 + row], expected);
    }
    assert_eq!(lines[12], "  A B C D E F G H I J");
}

#[test]
fn test_render_marks_in_place() {
    let mut board = Board::new();
    board.mark(Coord { row: 0, col: 0 }, CellMark::Miss).unwrap();
    board.mark(Coord { row: 2, col: 3 }, CellMark::Hit).unwrap();
    board.mark(Coord { row: 9, col: 9 }, CellMark::Sunk('S')).unwrap();

    let text = board.to_string();
    let lines: Vec<&str> = text.split('\n').collect();

    // in a body row, the mark of column c sits at char index 2c + 2
    let row0: Vec<char> = lines[2].chars().collect();
    assert_eq!(row0[2], '*');
    let row2: Vec<char> = lines[4].chars().collect();
    assert_eq!(row2[2 * 3 + 2], 'X');
    let row9: Vec<char> = lines[11].chars().collect();
    assert_eq!(row9[2 * 9 + 2], 'S');
}
