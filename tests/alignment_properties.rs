use proptest::prelude::*;
use sw_align::{align, fill, Direction, ScoreParams, Token, TracebackOperation};

fn ungapped(aligned: &[u8]) -> Vec<u8> {
    aligned.iter().copied().filter(|t| !t.is_gap()).collect()
}

fn any_params() -> impl Strategy<Value = ScoreParams> {
    (-20i32..=20, -20i32..=20, -20i32..=20)
        .prop_map(|(ms, gp, mm)| ScoreParams::new(ms, gp, mm))
}

proptest! {
    #[test]
    fn aligned_sides_are_contiguous_substrings(
        a in "[ACGT]{1,12}",
        b in "[ACGT]{1,12}",
        params in any_params(),
    ) {
        let (s1, s2) = (a.as_bytes(), b.as_bytes());
        let aln = align(s1, s2, &params);

        prop_assert_eq!(aln.aligned_seq1.len(), aln.aligned_seq2.len());
        prop_assert_eq!(aln.operations.len(), aln.len());

        let (start, end) = (aln.start_position, aln.end_position);
        prop_assert!(start.i <= end.i && start.j <= end.j);
        prop_assert_eq!(ungapped(&aln.aligned_seq1), s1[start.i..end.i].to_vec());
        prop_assert_eq!(ungapped(&aln.aligned_seq2), s2[start.j..end.j].to_vec());
    }

    #[test]
    fn score_matrix_is_never_negative(
        a in "[ACGT]{0,10}",
        b in "[ACGT]{0,10}",
        params in any_params(),
    ) {
        let tables = fill(a.as_bytes(), b.as_bytes(), &params);
        prop_assert!(tables.scores.as_slice().iter().all(|&h| h >= 0));
        prop_assert_eq!(tables.scores.at(tables.best), tables.best_score);
    }

    #[test]
    fn first_row_and_column_stay_empty(
        a in "[ACGT]{0,10}",
        b in "[ACGT]{0,10}",
        params in any_params(),
    ) {
        let tables = fill(a.as_bytes(), b.as_bytes(), &params);
        let (scores, directions) = (&tables.scores, &tables.directions);
        prop_assert!(scores.row(0).iter().all(|&h| h == 0));
        prop_assert!((0..scores.rows()).all(|r| scores.get(r, 0) == 0));
        prop_assert!(directions.row(0).iter().all(|&d| d == Direction::None));
        prop_assert!((0..directions.rows()).all(|r| directions.get(r, 0) == Direction::None));
    }

    #[test]
    fn self_alignment_is_identity(
        a in "[ACGT]{1,12}",
        ms in 1i32..=10,
        gp in -5i32..=0,
        mm in -5i32..=0,
    ) {
        let s = a.as_bytes();
        let aln = align(s, s, &ScoreParams::new(ms, gp, mm));
        prop_assert_eq!(&aln.aligned_seq1, &s.to_vec());
        prop_assert_eq!(&aln.aligned_seq2, &s.to_vec());
        prop_assert!(aln.operations.iter().all(|&op| op == TracebackOperation::Match));
        prop_assert_eq!(aln.identity(), Ok(100.0));
        prop_assert_eq!(aln.score, ms * s.len() as i32);
    }

    #[test]
    fn empty_side_gives_empty_alignment(a in "[ACGT]{0,12}", params in any_params()) {
        let s = a.as_bytes();
        prop_assert!(align(b"", s, &params).is_empty());
        prop_assert!(align(s, b"", &params).is_empty());
    }

    #[test]
    fn repeated_calls_are_identical(
        a in "[ACGT]{0,12}",
        b in "[ACGT]{0,12}",
        params in any_params(),
    ) {
        let first = align(a.as_bytes(), b.as_bytes(), &params);
        let second = align(a.as_bytes(), b.as_bytes(), &params);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn stats_cover_every_column(
        a in "[ACGT]{1,12}",
        b in "[ACGT]{1,12}",
        params in any_params(),
    ) {
        let aln = align(a.as_bytes(), b.as_bytes(), &params);
        prop_assert_eq!(aln.stats().columns(), aln.len());
    }
}
