/// Background clear colours cycled with `B`.
pub const BACKGROUNDS: [(&str, [f32; 3]); 7] = [
    ("Dark Blue", [0.05, 0.05, 0.2]),
    ("Black", [0.0, 0.0, 0.0]),
    ("Dark Purple", [0.15, 0.05, 0.2]),
    ("Dark Green", [0.05, 0.2, 0.05]),
    ("Grey Blue", [0.1, 0.1, 0.15]),
    ("Teal", [0.05, 0.1, 0.1]),
    ("Dark Red", [0.15, 0.05, 0.05]),
];

pub fn color(index: usize) -> [f32; 3] {
    BACKGROUNDS[index % BACKGROUNDS.len()].1
}

pub fn name(index: usize) -> &'static str {
    BACKGROUNDS[index % BACKGROUNDS.len()].0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_wraps() {
        assert_eq!(color(7), color(0));
        assert_eq!(name(8), "Black");
    }
}
