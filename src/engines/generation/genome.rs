/// Binary chromosome for real-valued search.
///
/// A genome is the concatenation of one fixed-width segment per decision
/// variable. Each segment is read as a big-endian unsigned integer and mapped
/// linearly into that variable's bounds (see [`codec`](super::codec)).
///
/// Genomes are only ever produced by random initialization or by the genetic
/// operators; nothing encodes an external real value back into bits.
///
/// # Example
///
/// ```
/// use bitga::engines::generation::genome::{to_bit_string, Genome};
///
/// let genome: Genome = vec![true, false, true, true];
/// assert_eq!(to_bit_string(&genome), "1011");
/// ```
pub type Genome = Vec<bool>;

pub fn to_bit_string(genome: &[bool]) -> String {
    genome.iter().map(|&bit| if bit { '1' } else { '0' }).collect()
}
