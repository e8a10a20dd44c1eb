//! Integration tests for latexclip.
//!
//! End-to-end regression cases for the plain-text converter and the
//! mathtext sanitizer, using expressions as users paste them.

use latexclip_convert::{latex_to_plaintext, sanitize_for_mathtext, wrap_for_tex};

// =============================================================================
// Plain text
// =============================================================================

#[test]
fn test_plaintext_preserves_nested_fractions() {
    assert_eq!(latex_to_plaintext(r"\frac{1+\frac{1}{x}}{y}"), "(1+(1)/(x))/(y)");
}

#[test]
fn test_plaintext_handles_nested_sqrt() {
    // The root argument stops at the first closing brace.
    assert_eq!(latex_to_plaintext(r"\sqrt{\frac{a}{b}}"), r"sqrt(\frac(a)(b))");
}

#[test]
fn test_plaintext_nth_root() {
    assert_eq!(latex_to_plaintext(r"\sqrt[3]{x}"), "(x)^(1/3)");
}

#[test]
fn test_plaintext_expands_text_blocks() {
    assert_eq!(latex_to_plaintext(r"\text{Area} = \frac{1}{2} b h"), "Area = (1)/(2) b h");
}

#[test]
fn test_plaintext_maps_common_symbols() {
    assert_eq!(latex_to_plaintext(r"\alpha \cdot \beta \leq \gamma"), "alpha · beta ≤ gamma");
}

#[test]
fn test_plaintext_handles_binomials() {
    assert_eq!(latex_to_plaintext(r"\binom{n}{k}"), "C(n, k)");
}

#[test]
fn test_plaintext_handles_displaystyle_binomials() {
    assert_eq!(latex_to_plaintext(r"\dbinom{\dfrac{n}{2}}{k}"), "C((n)/(2), k)");
}

#[test]
fn test_plaintext_handles_displaystyle_fractions() {
    assert_eq!(latex_to_plaintext(r"\dfrac{a}{\tfrac{b}{c}}"), "(a)/((b)/(c))");
}

#[test]
fn test_plaintext_handles_ampersands_in_text() {
    let latex = r"$$NOI = \text{Gross Potential Income} - \text{Vacancy & Collection Losses} - \text{Operating Expenses}$$";
    assert_eq!(
        latex_to_plaintext(latex),
        "NOI = Gross Potential Income - Vacancy & Collection Losses - Operating Expenses"
    );
}

#[test]
fn test_plaintext_renders_matrix_structure() {
    let latex = r"\begin{bmatrix} a & b \\ c & d \end{bmatrix}";
    assert_eq!(latex_to_plaintext(latex), "[a, b; c, d]");
}

#[test]
fn test_plaintext_handles_matrix_vector_equation() {
    let latex = r"A\mathbf{x} =
\begin{bmatrix}
1 & 2 \\
3 & 4
\end{bmatrix}
\begin{bmatrix}
x_1 \\ x_2
\end{bmatrix}
=
\begin{bmatrix}
5 \\ 11
\end{bmatrix}";

    assert_eq!(latex_to_plaintext(latex), "Ax = [1, 2; 3, 4] [x_1; x_2] = [5; 11]");
}

#[test]
fn test_plaintext_supports_cases_environments() {
    let latex = r"\begin{cases} x^2, & x > 0 \\ 0, & \text{otherwise} \end{cases}";
    assert_eq!(latex_to_plaintext(latex), "(x^2 if x > 0; 0 otherwise)");
}

#[test]
fn test_plaintext_handles_align_star() {
    let latex = r"\begin{align*} a &= b + c \\ d &= e - f \end{align*}";
    assert_eq!(latex_to_plaintext(latex), "a = b + c; d = e - f");
}

#[test]
fn test_plaintext_trims_hlines_in_arrays() {
    let latex = r"\begin{array}{cc} \hline a & b \\ \hline c & d \end{array}";
    assert_eq!(latex_to_plaintext(latex), "[a, b; c, d]");
}

#[test]
fn test_plaintext_hline_in_pmatrix() {
    let latex = r"\begin{pmatrix} \hline 1 & 0 \\ 0 & 1 \\ \hline \end{pmatrix}";
    assert_eq!(latex_to_plaintext(latex), "(1, 0; 0, 1)");
}

#[test]
fn test_plaintext_flattens_additional_text_macros() {
    assert_eq!(latex_to_plaintext(r"\mathbf{Net}~\mathrm{Income}"), "Net Income");
}

#[test]
fn test_plaintext_bmatrix_becomes_parenthesised() {
    // Braces left over at the end are groupings and turn into parentheses.
    let latex = r"\begin{Bmatrix} 1 & 2 \end{Bmatrix}";
    assert_eq!(latex_to_plaintext(latex), "(1, 2)");
}

#[test]
fn test_plaintext_determinant() {
    let latex = r"\det \begin{vmatrix} a & b \\ c & d \end{vmatrix} = ad - bc";
    assert_eq!(latex_to_plaintext(latex), "det |a, b; c, d| = ad - bc");
}

#[test]
fn test_plaintext_residual_rows_and_columns() {
    assert_eq!(latex_to_plaintext(r"a &=b \\ c&= d"), "a & =b ; c & = d");
}

#[test]
fn test_plaintext_sizing_and_functions() {
    let latex = r"\left( \sin x \right)^{2} + \cos^2 x";
    assert_eq!(latex_to_plaintext(latex), "( sin x )^2 + cos^2 x");
}

#[test]
fn test_plaintext_subscripts_and_superscripts() {
    assert_eq!(latex_to_plaintext(r"x_{i+1}^{n-1}"), "x_i+1^n-1");
    assert_eq!(latex_to_plaintext(r"e^{i\pi} + 1 = 0"), "e^ipi + 1 = 0");
}

#[test]
fn test_plaintext_symbols_and_greek() {
    assert_eq!(
        latex_to_plaintext(r"\nabla \times \vec{E} = -\partial_t B \pm \infty"),
        r"∇ × \vec(E) = -∂_t B ± ∞"
    );
    assert_eq!(latex_to_plaintext(r"\Delta x \approx \epsilon"), "Delta x ≈ epsilon");
}

#[test]
fn test_plaintext_escaped_braces_and_ampersand() {
    assert_eq!(latex_to_plaintext(r"\{ a \& b \}"), "{ a & b }");
}

#[test]
fn test_plaintext_inline_math_in_prose() {
    assert_eq!(latex_to_plaintext(r"Let $x \geq 0$ and $y \neq 1$."), "Let x ≥ 0 and y ≠ 1.");
}

#[test]
fn test_plaintext_unknown_macros_pass_through() {
    assert_eq!(latex_to_plaintext(r"\mathcal{L} + \hbar"), r"\mathcal(L) + \hbar");
}

#[test]
fn test_plaintext_malformed_fraction_passes_through() {
    assert_eq!(latex_to_plaintext(r"\frac{1}{2"), r"\frac(1)(2");
}

#[test]
fn test_plaintext_old_placeholder_text_is_literal() {
    let latex = r"__LACE_BRACE__ \{ __LATEXCLIP_ESC_AMP__";
    assert_eq!(latex_to_plaintext(latex), "__LACE_BRACE__ { __LATEXCLIP_ESC_AMP__");
}

#[test]
fn test_plaintext_crlf_input() {
    let latex = "\\begin{matrix}\r\na & b \\\\\r\nc & d\r\n\\end{matrix}";
    assert_eq!(latex_to_plaintext(latex), "[a, b; c, d]");
}

// =============================================================================
// Mathtext
// =============================================================================

#[test]
fn test_sanitizer_escapes_plain_text_specials() {
    assert_eq!(sanitize_for_mathtext("Save 50% & more #1"), r"$Save 50\% \& more \#1$");
}

#[test]
fn test_sanitizer_retains_existing_escapes() {
    assert_eq!(sanitize_for_mathtext(r"Already escaped \% value"), r"$Already escaped \% value$");
}

#[test]
fn test_sanitizer_preserves_spaces_inside_text() {
    assert_eq!(
        sanitize_for_mathtext(r"$$NOI = \text{Operating Expenses}$$"),
        r"$NOI = \mathrm{Operating\ Expenses}$"
    );
}

#[test]
fn test_sanitizer_escapes_ampersands_inside_text() {
    assert_eq!(
        sanitize_for_mathtext(r"$$\text{Vacancy & Collection}$$"),
        r"$\mathrm{Vacancy\ \&\ Collection}$"
    );
}

#[test]
fn test_sanitizer_escapes_reserved_characters_inside_text() {
    assert_eq!(
        sanitize_for_mathtext(r"$$\text{50% of #1 $}$$"),
        r"$\mathrm{50\%\ of\ \#1\ \$}$"
    );
    assert_eq!(sanitize_for_mathtext(r"\text{5\%}"), r"$\mathrm{5\%}$");
}

#[test]
fn test_sanitizer_single_wrapping() {
    assert_eq!(sanitize_for_mathtext(r"$\alpha + \beta$"), r"$\alpha + \beta$");
    assert_eq!(sanitize_for_mathtext(r"\[ \left[ x \right] \]"), "$[ x ]$");
}

#[test]
fn test_sanitizer_multiline_input() {
    let latex = "a +\n  b\n  = c";
    assert_eq!(sanitize_for_mathtext(latex), "$a + b = c$");
}

// =============================================================================
// TeX
// =============================================================================

#[test]
fn test_wrap_for_tex() {
    assert_eq!(wrap_for_tex(r"\frac{1}{2}"), r"\[\frac{1}{2}\]");
    assert_eq!(wrap_for_tex(r"$$\frac{1}{2}$$"), r"\[\frac{1}{2}\]");
    assert_eq!(wrap_for_tex(r"\[x\]"), r"\[x\]");
}
