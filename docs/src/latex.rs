//! LaTeX rendering of a single proof record.
//!
//! Each category owns a body template. Placeholders are written `@name@` and
//! are replaced by the rendered text of the record field of that name, so a
//! document never formats a number itself.

use e8_spec::{Category, ProofRecord};

const PREAMBLE: &str = r"\documentclass{article}
\usepackage{amsmath}
\usepackage{amssymb}
\usepackage{amsthm}
\newtheorem{theorem}{Theorem}
";

/// Renders `record` as a standalone LaTeX article.
#[must_use]
pub fn render(record: &ProofRecord) -> String {
    let mut out = String::with_capacity(2048);
    out.push_str(PREAMBLE);
    out.push_str(&format!(
        "\\title{{E8 Proof \\#{}: {}}}\n",
        record.id,
        escape_latex(record.category.label())
    ));
    out.push_str("\\date{");
    out.push_str(&escape_latex(&record.timestamp));
    out.push_str("}\n\\begin{document}\n\\maketitle\n\n");
    out.push_str(&fill(template(record.category), record));
    out.push_str(&fill(CLOSING, record));
    out.push_str("\\end{document}\n");
    out
}

/// Escapes the characters LaTeX treats specially in running text.
#[must_use]
pub fn escape_latex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '_' | '#' | '$' | '%' | '&' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            '\\' => out.push_str("\\textbackslash{}"),
            _ => out.push(c),
        }
    }
    out
}

/// Replaces every `@name@` placeholder in `template`.
fn fill(template: &str, record: &ProofRecord) -> String {
    let mut out = String::with_capacity(template.len() + 256);
    for (i, segment) in template.split('@').enumerate() {
        if i % 2 == 0 {
            out.push_str(segment);
        } else {
            out.push_str(&lookup(segment, record));
        }
    }
    out
}

fn lookup(name: &str, record: &ProofRecord) -> String {
    match name {
        "id" => record.id.to_string(),
        "sigma" => record.significance.text.clone(),
        "theorem" => escape_latex(&record.theorem),
        "verdict" => verdict(record.verified).to_owned(),
        "checksum" => record.checksum.clone(),
        _ => record.text(name).to_owned(),
    }
}

fn verdict(verified: bool) -> &'static str {
    if verified {
        "VERIFIED"
    } else {
        "NOT VERIFIED"
    }
}

const CLOSING: &str = r"\section*{Conclusion}
Status: \textbf{@verdict@}. Significance:
\begin{equation*}
\sigma = @sigma@
\end{equation*}
Record checksum: \texttt{@checksum@}.

";

fn template(category: Category) -> &'static str {
    match category {
        Category::Triality => TRIALITY,
        Category::SpinNetwork => SPIN_NETWORK,
        Category::OrchOr => ORCH_OR,
        Category::StringVacuum => STRING_VACUUM,
        Category::RootLattice => ROOT_LATTICE,
        Category::WeylGroup => WEYL_GROUP,
        Category::Cartan => CARTAN,
        Category::Symmetry => SYMMETRY,
        Category::Quantum => QUANTUM,
        Category::Unification => UNIFICATION,
        Category::PathAction => PATH_ACTION,
        Category::GolayCode => GOLAY_CODE,
        Category::Moonshine => MOONSHINE,
        Category::LieBracket => LIE_BRACKET,
    }
}

const TRIALITY: &str = r"\section*{Statement}
\begin{theorem}
@theorem@.
\end{theorem}

\section*{Proof}
Let $T$ be the cyclic permutation of the three eight-dimensional
representations of $\mathrm{Spin}(8)$, with phase
\begin{equation*}
\theta = \frac{2\pi}{3} = @phase@, \qquad \cos\theta = @cos_phase@.
\end{equation*}
As a permutation matrix, $\operatorname{tr} T = @trace@$ and
$\det T = @determinant@$. Since $T^3$ permutes every representation back to
itself, $T^3 = I$ and the triality cycle closes.
\qed

";

const SPIN_NETWORK: &str = r"\section*{Statement}
\begin{theorem}
@theorem@.
\end{theorem}

\section*{Proof}
With Immirzi parameter $\gamma = @immirzi@$ and spin $j = 15.5$, the LQG
area eigenvalue is
\begin{equation*}
A_{\mathrm{LQG}} = 8\pi\gamma\sqrt{j(j+1)} = @lqg_area@.
\end{equation*}
The E8 triality area is $A_{E8} = 248/2 = @e8_area@$. The deviation between
the two areas is
\begin{equation*}
\sigma = \frac{\bigl| |A_{\mathrm{LQG}}| - |A_{E8}| \bigr|}{10^{-180}} = @sigma@.
\end{equation*}
\qed

";

const ORCH_OR: &str = r"\section*{Statement}
\begin{theorem}
@theorem@.
\end{theorem}

\section*{Proof}
The observed objective-reduction time is $\tau_{\mathrm{obs}} = @tau_obs@$ s.
Scaling by $N = 248$ and the triality boost gives
\begin{equation*}
\tau_{\mathrm{brain}} = N \cdot \frac{1}{|\cos(2\pi/3)|} \cdot \tau_{\mathrm{obs}}
= 248 \cdot 2 \cdot 4 \times 10^{-13} = @tau_brain@ \ \mathrm{s},
\end{equation*}
which is compared with the 25 ms conscious cycle:
\begin{equation*}
\sigma = \frac{|\tau_{\mathrm{brain}} - 0.025|}{10^{-180}} = @sigma@.
\end{equation*}
\qed

";

const STRING_VACUUM: &str = r"\section*{Statement}
\begin{theorem}
@theorem@.
\end{theorem}

\section*{Proof}
The heterotic gauge group $E_8 \times E_8$ has dimension @pair_dimension@.
Projecting through the triality operator yields the unified dimension
\begin{equation*}
d_{\mathrm{unified}} = @unified_dim@,
\end{equation*}
whose magnitude is compared with $\dim E_8 = 248$:
\begin{equation*}
\sigma = \frac{\bigl| |d_{\mathrm{unified}}| - 248 \bigr|}{10^{-9}} = @sigma@.
\end{equation*}
\qed

";

const ROOT_LATTICE: &str = r"\section*{Statement}
\begin{theorem}
@theorem@.
\end{theorem}

\section*{Proof}
The E8 lattice has @total_roots@ roots. A sampled root vector $\alpha$ has
\begin{equation*}
\lVert \alpha \rVert^2 = @root_norm@,
\end{equation*}
in agreement with the even unimodular norm $\lVert \alpha \rVert^2 = 2$.
\qed

";

const WEYL_GROUP: &str = r"\section*{Statement}
\begin{theorem}
@theorem@.
\end{theorem}

\section*{Proof}
The degrees of the basic invariants of $W(E_8)$ are
$2, 8, 12, 14, 18, 20, 24, 30$; the largest is the Coxeter number
$h = @coxeter_number@$. Their product is the group order:
\begin{equation*}
\lvert W(E_8) \rvert = \prod_i d_i = @weyl_order@.
\end{equation*}
\qed

";

const CARTAN: &str = r"\section*{Statement}
\begin{theorem}
@theorem@.
\end{theorem}

\section*{Proof}
The Cartan matrix $A$ of $E_8$ has $A_{ii} = 2$ on the diagonal and
$A_{ij} \in \{0, -1\}$ off it. Gaussian elimination gives
\begin{equation*}
\det A = @determinant@,
\end{equation*}
so $A$ is unimodular and of full rank 8. A sampled eigenvalue is
$\lambda = @eigenvalue@$.
\qed

";

const SYMMETRY: &str = r"\section*{Statement}
\begin{theorem}
@theorem@.
\end{theorem}

\section*{Proof}
E8 has rank 8 and @positive_roots@ positive roots, so
$\dim E_8 = 8 + 2 \cdot 120 = 248$. The normalised Killing form evaluates to
\begin{equation*}
\kappa = @killing_form@.
\end{equation*}
\qed

";

const QUANTUM: &str = r"\section*{Statement}
\begin{theorem}
@theorem@.
\end{theorem}

\section*{Proof}
Summing the squared structure constants $f_{abc}$ over the adjoint
representation gives
\begin{equation*}
\sum_{a,b,c} f_{abc}^2 = @structure_norm@,
\end{equation*}
with energy parameter $E = @energy@$.
\qed

";

const UNIFICATION: &str = r"\section*{Statement}
\begin{theorem}
@theorem@.
\end{theorem}

\section*{Proof}
The unification parameter combining the quantum, gravitational, and
conscious sectors is
\begin{equation*}
\xi = @unification@,
\end{equation*}
which is compared with unity.
\qed

";

const PATH_ACTION: &str = r"\section*{Statement}
\begin{theorem}
@theorem@.
\end{theorem}

\section*{Proof}
A path through @waypoints@ waypoints in eight-dimensional configuration
space has length $L = @path_length@$. Normalising by the E8 dimension,
\begin{equation*}
S = \frac{L}{\sqrt{248}} = @action@.
\end{equation*}
\qed

";

const GOLAY_CODE: &str = r"\section*{Statement}
\begin{theorem}
@theorem@.
\end{theorem}

\section*{Proof}
The extended binary Golay code has rate $k/n = @code_rate@$ and minimum
distance $d = @min_distance@$. A sampled message has weight
@message_weight@. Three copies of the E8 lattice span
\begin{equation*}
\dim \Lambda_{24} = 3 \cdot 8 = @leech_dimension@.
\end{equation*}
\qed

";

const MOONSHINE: &str = r"\section*{Statement}
\begin{theorem}
@theorem@.
\end{theorem}

\section*{Proof}
The Thompson series coefficient is $T_g = @thompson_t_g@$ and the modular
weight is @modular_weight@. The first nontrivial coefficient of the
$j$-invariant satisfies
\begin{equation*}
@j_invariant_coeff@ = 196883 + 1,
\end{equation*}
the smallest faithful Monster representation plus the trivial one.
\qed

";

const LIE_BRACKET: &str = r"\section*{Statement}
\begin{theorem}
@theorem@.
\end{theorem}

\section*{Proof}
For sampled $X, Y \in \mathfrak{e}_8$, the bracket restricted to the first
three coordinates has norm
\begin{equation*}
\lVert [X, Y] \rVert = @bracket_norm@,
\end{equation*}
and $[X, Y] + [Y, X] = 0$ holds componentwise.
\qed

";
