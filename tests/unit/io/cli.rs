//! Tests for CLI argument parsing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use framepack::io::cli::{Cli, parse_frame_size};
    use framepack::spatial::FrameSize;

    // Tests frame size arguments accept the WIDTHxHEIGHT form
    // Verified by uppercasing the separator
    #[test]
    fn test_parse_frame_size() {
        assert_eq!(
            parse_frame_size("10x15"),
            Ok(FrameSize {
                width: 10,
                height: 15
            })
        );
        assert_eq!(
            parse_frame_size("9X9"),
            Ok(FrameSize {
                width: 9,
                height: 9
            })
        );
    }

    // Tests malformed or non-positive sizes are rejected with a reason
    // Verified against each failure mode
    #[test]
    fn test_parse_frame_size_rejects_invalid() {
        assert!(parse_frame_size("10").is_err());
        assert!(parse_frame_size("ax15").is_err());
        assert!(parse_frame_size("0x15").is_err());
        assert!(parse_frame_size("10x-1").is_err());
    }

    // Tests defaults match the built-in wall configuration
    // Verified by parsing an empty argument list
    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["framepack"]);

        assert_eq!(cli.width, 230);
        assert_eq!(cli.height, 140);
        assert!((cli.coverage - 0.54).abs() < f64::EPSILON);
        assert_eq!(cli.margin_min, 2);
        assert_eq!(cli.margin_max, 5);
        assert!(cli.frame.is_empty());
        assert!(cli.seed.is_none());
        assert!(!cli.visualize);
        assert!(cli.should_show_progress());
        assert_eq!(cli.output.to_str(), Some("wall_visualization.png"));
    }

    // Tests repeated --frame flags accumulate into a catalog override
    // Verified by counting the parsed entries
    #[test]
    fn test_cli_frame_overrides() {
        let cli = Cli::parse_from(["framepack", "-f", "10x15", "--frame", "9x9", "out.png"]);

        assert_eq!(cli.frame.len(), 2);
        assert_eq!(cli.output.to_str(), Some("out.png"));
    }
}
