use nanoid::nanoid;

const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

pub const SUGGESTED_LEN: usize = 8;

/// Random short code that always passes local validation. Hyphens are left
/// out of the alphabet so the boundary rule can never trip.
pub fn suggest_short_code() -> String {
    nanoid!(SUGGESTED_LEN, &ALPHABET)
}
