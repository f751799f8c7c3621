/// Values shown while a counter moves from `from` to `to` in `steps` frames.
///
/// The last frame is always exactly `to`. Equal endpoints, or zero steps,
/// produce a single frame.
pub fn counter_frames(from: usize, to: usize, steps: u32) -> Vec<usize> {
    if from == to || steps == 0 {
        return vec![to];
    }
    let (from_f, to_f) = (from as f64, to as f64);
    let increment = (to_f - from_f) / steps as f64;
    (1..=steps)
        .map(|i| {
            if i == steps {
                to
            } else {
                (from_f + increment * i as f64).round() as usize
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_frames_end_on_target() {
        let frames = counter_frames(0, 7, 20);
        assert_eq!(frames.len(), 20);
        assert_eq!(*frames.last().unwrap(), 7);
        assert!(frames.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_counter_frames_counting_down() {
        let frames = counter_frames(40, 2, 20);
        assert_eq!(*frames.last().unwrap(), 2);
        assert!(frames.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_counter_frames_unchanged_value() {
        assert_eq!(counter_frames(5, 5, 20), vec![5]);
        assert_eq!(counter_frames(0, 3, 0), vec![3]);
    }
}
