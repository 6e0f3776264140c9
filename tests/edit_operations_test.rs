use tmd::document::edit::{
    add_row, insert_exercise, remove_exercise, remove_row, rename_exercise, set_cell, set_title,
};
use tmd::document::{EditError, ExerciseTemplate, parse, serialize};

const WORKOUT: &str = "[[Leg Day]]\n\n### Squat\n| Weight | Reps | RPE |\n| 100 | 5 | 7 |\n\n### Lunge\n| Reps |\n| 12 |\n";

#[cfg(test)]
mod row_tests {
    use super::*;

    #[test]
    fn test_add_row_matches_header_width() {
        let document = parse(WORKOUT);
        let edited = add_row(&document, 0).unwrap();

        assert_eq!(edited.exercises[0].table.len(), 3);
        assert_eq!(edited.exercises[0].table[2], vec!["", "", ""]);
        // The original is untouched
        assert_eq!(document.exercises[0].table.len(), 2);
        assert_eq!(edited.exercises[1], document.exercises[1]);
    }

    #[test]
    fn test_add_row_to_empty_table_uses_two_cells() {
        let document = parse("### Stretching\n");
        let edited = add_row(&document, 0).unwrap();
        assert_eq!(edited.exercises[0].table, vec![vec!["", ""]]);
    }

    #[test]
    fn test_set_cell_then_serialize() {
        let document = parse(WORKOUT);
        let edited = add_row(&document, 1).unwrap();
        let edited = set_cell(&edited, 1, 2, 0, "10").unwrap();

        assert!(serialize(&edited).ends_with("### Lunge\n| Reps |\n| 12 |\n| 10 |\n"));
    }

    #[test]
    fn test_set_cell_out_of_range() {
        let document = parse(WORKOUT);
        assert_eq!(
            set_cell(&document, 1, 1, 3, "x"),
            Err(EditError::CellOutOfRange {
                exercise: 1,
                row: 1,
                column: 3
            })
        );
        assert!(matches!(
            set_cell(&document, 5, 0, 0, "x"),
            Err(EditError::ExerciseOutOfRange { index: 5, len: 2 })
        ));
    }

    #[test]
    fn test_remove_row() {
        let document = parse(WORKOUT);
        let edited = remove_row(&document, 0, 1).unwrap();
        assert_eq!(edited.exercises[0].table.len(), 1);

        assert_eq!(remove_row(&document, 0, 0), Err(EditError::HeaderRow));
        assert_eq!(
            remove_row(&document, 0, 9),
            Err(EditError::RowOutOfRange { exercise: 0, row: 9 })
        );
    }
}

#[cfg(test)]
mod exercise_tests {
    use super::*;

    #[test]
    fn test_insert_exercise_after_index() {
        let document = parse(WORKOUT);
        let edited =
            insert_exercise(&document, Some(0), "  Leg press ", &ExerciseTemplate::default())
                .unwrap();

        let names: Vec<_> = edited.exercises.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Squat", "Leg press", "Lunge"]);

        let table = &edited.exercises[1].table;
        assert_eq!(table[0], vec!["Weight", "Reps"]);
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_insert_exercise_at_front() {
        let document = parse(WORKOUT);
        let template = ExerciseTemplate {
            header: vec!["Seconds".to_string()],
            blank_rows: 0,
        };
        let edited = insert_exercise(&document, None, "Plank", &template).unwrap();

        assert_eq!(edited.exercises[0].name, "Plank");
        assert_eq!(edited.exercises[0].table, vec![vec!["Seconds"]]);
    }

    #[test]
    fn test_insert_exercise_rejects_bad_input() {
        let document = parse(WORKOUT);
        let template = ExerciseTemplate::default();

        assert_eq!(
            insert_exercise(&document, Some(0), "   ", &template),
            Err(EditError::EmptyName)
        );
        assert!(insert_exercise(&document, Some(2), "Calf raise", &template).is_err());
    }

    #[test]
    fn test_rename_exercise() {
        let document = parse(WORKOUT);
        let edited = rename_exercise(&document, 1, " Walking lunge ").unwrap();

        assert_eq!(edited.exercises[1].name, "Walking lunge");
        assert_eq!(rename_exercise(&document, 1, ""), Err(EditError::EmptyName));
    }

    #[test]
    fn test_remove_exercise() {
        let document = parse(WORKOUT);
        let edited = remove_exercise(&document, 0).unwrap();

        assert_eq!(edited.exercises.len(), 1);
        assert_eq!(edited.exercises[0].name, "Lunge");
        assert_eq!(edited.title, document.title);
        assert!(remove_exercise(&edited, 1).is_err());
    }

    #[test]
    fn test_set_title() {
        let document = parse(WORKOUT);

        let edited = set_title(&document, "  Legs  ");
        assert_eq!(edited.title.as_deref(), Some("Legs"));

        let cleared = set_title(&document, " ");
        assert_eq!(cleared.title, None);
        assert!(serialize(&cleared).starts_with("### Squat"));
    }
}
