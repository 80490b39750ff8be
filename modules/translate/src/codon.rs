use seqlens_core::alphabet::{AminoAcid, Nucleotide};

/// Standard genetic code (NCBI translation table 1), indexed by
/// `rank(first) * 16 + rank(second) * 4 + rank(third)` with A=0, C=1, G=2,
/// T/U=3.
const STANDARD_CODE: [AminoAcid; 64] = {
    use AminoAcid::*;
    [
        K, N, K, N, T, T, T, T, R, S, R, S, I, I, M, I, // A..
        Q, H, Q, H, P, P, P, P, R, R, R, R, L, L, L, L, // C..
        E, D, E, D, A, A, A, A, G, G, G, G, V, V, V, V, // G..
        Stop, Y, Stop, Y, S, S, S, S, Stop, C, W, C, L, F, L, F, // T..
    ]
};

/// Translate one codon through the standard genetic code.
///
/// The lookup is rank-based, so any strict 4-letter nucleotide alphabet
/// (DNA or RNA) resolves through the same table.
pub fn translate_codon<N: Nucleotide>(first: N, second: N, third: N) -> AminoAcid {
    debug_assert!(N::CARDINALITY == 4, "codon lookup requires a 4-letter nucleotide alphabet");
    let index = first.rank() as usize * 16 + second.rank() as usize * 4 + third.rank() as usize;
    STANDARD_CODE[index]
}
