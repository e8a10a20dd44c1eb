//! Snapshot tests for latexclip output.
//!
//! Each snapshot holds every representation of one expression.
//! Run with `cargo insta review` to update snapshots.

use latexclip_convert::TransformSet;
use latexclip_core::OutputMode;

/// Helper to run all transforms and label their output.
fn render(input: &str) -> String {
    TransformSet::for_mode(OutputMode::All)
        .apply(input)
        .into_iter()
        .map(|(name, output)| format!("{}: {}", name, output))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_snapshot_quadratic_formula() {
    let output = render(r"x = \frac{-b \pm \sqrt{b^2 - 4ac}}{2a}");
    insta::assert_snapshot!("quadratic_formula", output);
}

#[test]
fn test_snapshot_absolute_value_cases() {
    let input = [
        r"|x| = \begin{cases}",
        r"  x, & x \geq 0 \\",
        r"  -x, & \text{otherwise}",
        r"\end{cases}",
    ]
    .join("\n");
    let output = render(&input);
    insta::assert_snapshot!("absolute_value_cases", output);
}

#[test]
fn test_snapshot_aligned_system() {
    let input = [
        r"\begin{aligned}",
        r"  2x + 3y &= 7 \\",
        r"  x - y &= 1",
        r"\end{aligned}",
    ]
    .join("\n");
    let output = render(&input);
    insta::assert_snapshot!("aligned_system", output);
}

#[test]
fn test_snapshot_rotation_matrix() {
    let output = render(
        r"R(\theta) = \begin{pmatrix} \cos\theta & -\sin\theta \\ \sin\theta & \cos\theta \end{pmatrix}",
    );
    insta::assert_snapshot!("rotation_matrix", output);
}

#[test]
fn test_snapshot_operating_income() {
    let output = render(
        r"$$NOI = \text{Gross Income} - \text{Vacancy & Collection} \times 5\%$$",
    );
    insta::assert_snapshot!("operating_income", output);
}
