// End-to-end tests spanning load, validation, filtering, comparison and
// rendering, on small hand-built methylation tables.

use methyl_statistics::comparing::{compare_regions, compare_samples};
use methyl_statistics::error::MethylError;
use methyl_statistics::filtering::{self, CutoffDirection};
use methyl_statistics::methods::StatMethod;
use methyl_statistics::model::{MethylationTable, PositionKind};
use methyl_statistics::render;
use methyl_statistics::validation::{ArgumentCheck, CompositeCheck};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn load_fixture() -> MethylationTable {
    let header = "chr,gene,S1,S2,S3";
    let lines = [
        "17,TP53,0.87,0.85,0.89",
        "16,CDH5,0.1,0.0,0.4",
        "X,BRCA1,0.0,1.0,0.45",
    ];
    MethylationTable::from_lines(header, &lines, 2).unwrap()
}

#[test]
fn validated_filter_pipeline_narrows_and_renders() {
    let mut table = load_fixture();

    let samples = strings(&["S2", "S1"]);
    let chromosomes = strings(&["17", "X"]);
    let cutoff = 0.7;

    let mut gate = CompositeCheck::new();
    gate.add(ArgumentCheck::Sample(&samples, &table))
        .add(ArgumentCheck::Chromosome(&chromosomes))
        .add(ArgumentCheck::Cutoff(cutoff));
    gate.pass_all().unwrap();

    // Fixed pipeline order: samples, then position, then cutoff.
    filtering::filter_by_samples(&mut table, &samples).unwrap();
    filtering::filter_by_position(&mut table, PositionKind::Chromosome, &chromosomes);
    filtering::filter_by_cutoff(&mut table, cutoff, CutoffDirection::Upper);

    assert_eq!(table.samples(), &strings(&["S2", "S1"]));
    assert_eq!(table.n_rows(), 2);

    let rendered = render::render_table(&table);
    assert_eq!(
        rendered,
        "chr,gene,S2,S1\n17,TP53,0.85,0.87\nX,BRCA1,1.00,NaN\n"
    );
}

#[test]
fn invalid_arguments_stop_the_pipeline_before_filtering() {
    let table = load_fixture();
    let chromosomes = strings(&["17", "chr9"]);

    let mut gate = CompositeCheck::new();
    gate.add(ArgumentCheck::Chromosome(&chromosomes));
    let err = gate.pass_all().unwrap_err();
    assert_eq!(err, MethylError::InvalidChromosome("chr9".to_string()));

    // Nothing was filtered: the table still holds all rows and samples.
    assert_eq!(table.n_rows(), 3);
    assert_eq!(table.n_samples(), 3);
}

#[test]
fn sample_pairs_come_out_in_lexicographic_index_order() {
    let header = "chr,gene,A,B,C";
    let lines = ["1,G1,0.1,0.4,0.9", "2,G2,0.2,0.3,0.8", "3,G3,0.5,0.6,0.7"];
    let table = MethylationTable::from_lines(header, &lines, 2).unwrap();

    let result = compare_samples(&table, &strings(&["A", "B", "C"]), &[StatMethod::TTest]).unwrap();

    assert_eq!(result.pair_labels(), &strings(&["A,B", "A,C", "B,C"]));
    assert_eq!(result.outcomes(StatMethod::TTest).unwrap().len(), 3);
}

#[test]
fn outcomes_stay_in_caller_method_order() {
    let table = load_fixture();
    let methods = [StatMethod::Spearman, StatMethod::Welch, StatMethod::TTest];

    let result = compare_samples(&table, &strings(&["S1", "S2"]), &methods).unwrap();

    assert_eq!(result.methods(), &methods);
    assert_eq!(result.n_pairs(), 1);
    for method in methods {
        assert_eq!(result.outcomes(method).unwrap().len(), 1);
    }

    let rendered = render::render_comparison(&result);
    assert!(rendered.starts_with("Variable,Variable,spearman,welch-test,t-test\n"));
    assert!(rendered.lines().nth(1).unwrap().starts_with("S1,S2,"));
}

#[test]
fn missing_values_skip_the_pair_instead_of_failing() {
    let header = "chr,gene,A,B";
    let lines = ["1,G1,0.5,0.4", "2,G2,NA,0.3"];
    let table = MethylationTable::from_lines(header, &lines, 2).unwrap();

    let result = compare_samples(&table, &strings(&["A", "B"]), &[StatMethod::Spearman]).unwrap();

    // Column A carries a missing value, so the only pair is skipped; the
    // result is empty but the call succeeds.
    assert!(result.is_empty());
    assert_eq!(result.outcomes(StatMethod::Spearman).unwrap().len(), 0);
}

#[test]
fn skipped_pairs_leave_other_pairs_intact() {
    let header = "chr,gene,A,B,C";
    let lines = ["1,G1,NA,0.4,0.6", "2,G2,0.2,0.3,0.5", "3,G3,0.9,0.6,0.4"];
    let table = MethylationTable::from_lines(header, &lines, 2).unwrap();

    let result =
        compare_samples(&table, &strings(&["A", "B", "C"]), &[StatMethod::Welch]).unwrap();

    // A is tainted by the missing value, so only B vs C survives.
    assert_eq!(result.pair_labels(), &strings(&["B,C"]));
}

#[test]
fn unknown_sample_fails_the_whole_comparison() {
    let table = load_fixture();
    let err =
        compare_samples(&table, &strings(&["S1", "S9"]), &[StatMethod::TTest]).unwrap_err();
    assert_eq!(err, MethylError::UnknownSample("S9".to_string()));
}

#[test]
fn unequal_region_lengths_require_welch() {
    // Chromosome 17 covers two rows (6 values), X only one (3 values).
    let header = "chr,gene,S1,S2,S3";
    let lines = [
        "17,TP53,0.87,0.85,0.89",
        "17,BRCA1,0.1,0.2,0.3",
        "X,XIST,0.4,0.5,0.6",
    ];
    let table = MethylationTable::from_lines(header, &lines, 2).unwrap();
    let tokens = strings(&["17", "X"]);

    let err = compare_regions(
        &table,
        PositionKind::Chromosome,
        &tokens,
        &[StatMethod::Spearman],
    )
    .unwrap_err();
    assert_eq!(err, MethylError::UnequalLengths { left: 6, right: 3 });

    // The same request with only the Welch test succeeds.
    let result = compare_regions(
        &table,
        PositionKind::Chromosome,
        &tokens,
        &[StatMethod::Welch],
    )
    .unwrap();
    assert_eq!(result.pair_labels(), &strings(&["17,X"]));
    let p = result.outcomes(StatMethod::Welch).unwrap()[0];
    assert!((0.0..=1.0).contains(&p));
}

#[test]
fn equal_sized_regions_compare_with_every_method() {
    let header = "chr,gene,S1,S2,S3";
    let lines = [
        "17,TP53,0.87,0.85,0.89",
        "17,BRCA1,0.1,0.2,0.3",
        "16,CDH5,0.4,0.5,0.6",
        "16,CDH1,0.7,0.8,0.9",
    ];
    let table = MethylationTable::from_lines(header, &lines, 2).unwrap();
    let tokens = strings(&["17", "16"]);
    let methods = [StatMethod::Spearman, StatMethod::TTest, StatMethod::Wilcoxon];

    let result =
        compare_regions(&table, PositionKind::Chromosome, &tokens, &methods).unwrap();

    assert_eq!(result.pair_labels(), &strings(&["17,16"]));
    for method in methods {
        assert_eq!(result.outcomes(method).unwrap().len(), 1);
    }
}

#[test]
fn region_tokens_match_rows_case_insensitively() {
    let header = "chr,gene,S1,S2";
    let lines = ["X,XIST,0.1,0.2", "x,TSIX,0.3,0.4", "1,GJB2,0.5,0.6"];
    let table = MethylationTable::from_lines(header, &lines, 2).unwrap();

    let result = compare_regions(
        &table,
        PositionKind::Chromosome,
        &strings(&["X", "1"]),
        &[StatMethod::Welch],
    )
    .unwrap();

    // Both X spellings fold into one region of four values.
    assert_eq!(result.pair_labels(), &strings(&["X,1"]));
}

#[test]
fn remove_missing_unblocks_previously_skipped_pairs() {
    let header = "chr,gene,A,B";
    let lines = ["1,G1,0.5,0.4", "2,G2,NA,0.3", "3,G3,0.7,0.8"];
    let mut table = MethylationTable::from_lines(header, &lines, 2).unwrap();

    let before =
        compare_samples(&table, &strings(&["A", "B"]), &[StatMethod::Spearman]).unwrap();
    assert!(before.is_empty());

    filtering::remove_missing(&mut table);
    assert_eq!(table.n_rows(), 2);

    let after =
        compare_samples(&table, &strings(&["A", "B"]), &[StatMethod::Spearman]).unwrap();
    assert_eq!(after.pair_labels(), &strings(&["A,B"]));
}
