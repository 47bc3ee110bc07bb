/// Rounds the given size up to the next multiple of the allocation unit.
///
/// # Examples
///
/// ```rust
/// use fixedpool::{ALIGNMENT, align};
///
/// assert_eq!(ALIGNMENT, 4);
///
/// assert_eq!(align!(0), 0);
/// assert_eq!(align!(1), 4);
/// assert_eq!(align!(10), 12);
/// assert_eq!(align!(12), 12);
/// ```
#[macro_export]
macro_rules! align {
  ($value:expr) => {
    ($value + $crate::ALIGNMENT - 1) & !($crate::ALIGNMENT - 1)
  };
}

#[cfg(test)]
mod tests {
  use crate::ALIGNMENT;

  #[test]
  fn test_align() {
    let mut alignments = Vec::new();

    for i in 0..10 {
      let sizes = (ALIGNMENT * i + 1)..=(ALIGNMENT * (i + 1));

      let expected_alignment = ALIGNMENT * (i + 1);

      alignments.push((sizes, expected_alignment));
    }

    for (sizes, expected) in alignments {
      for size in sizes {
        assert_eq!(expected, align!(size));
      }
    }
  }

  #[test]
  fn test_align_zero() {
    assert_eq!(0, align!(0));
  }
}
