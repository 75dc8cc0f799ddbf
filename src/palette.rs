//! Couleur stable par membre, pour les calendriers qui consomment l'export.

use crate::model::UserId;

pub const PALETTE: [&str; 12] = [
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#ff9da7",
    "#9c755f", "#bab0ac", "#1f77b4", "#2ca02c",
];

/// Même identifiant, même couleur, d'un rendu à l'autre (FNV-1a 64 bits).
pub fn user_color(user: &UserId) -> &'static str {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for b in user.as_str().bytes() {
        hash ^= u64::from(b);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    PALETTE[(hash % PALETTE.len() as u64) as usize]
}
