//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use framepack::LayoutError;
    use std::error::Error;

    // Tests error source chaining works correctly
    // Verified by breaking the source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = LayoutError::FileSystem {
            path: "/tmp/test.png".into(),
            operation: "create file",
            source: io_error,
        };

        assert!(error.source().is_some());
    }

    // Tests LayoutIncomplete formatting reports both area counts
    // Verified by omitting the required area from the message
    #[test]
    fn test_layout_incomplete_message() {
        let error = LayoutError::LayoutIncomplete {
            covered_area: 150,
            required_area: 158,
            stalled_passes: 8,
        };

        let message = error.to_string();
        assert!(message.contains("150"));
        assert!(message.contains("158"));
        assert!(message.contains("8 unproductive passes"));
    }

    // Tests FrameExceedsWall names both rectangles
    // Verified by omitting the wall dimensions from the message
    #[test]
    fn test_frame_exceeds_wall_message() {
        let error = LayoutError::FrameExceedsWall {
            frame_width: 25,
            frame_height: 10,
            wall_width: 20,
            wall_height: 20,
        };

        let message = error.to_string();
        assert!(message.contains("25x10"));
        assert!(message.contains("20x20"));
    }

    // Tests configuration errors carry parameter, value, and reason
    // Verified by omitting the value from the message
    #[test]
    fn test_invalid_parameter_message() {
        let error = LayoutError::InvalidParameter {
            parameter: "target_fraction",
            value: "1.5".to_string(),
            reason: "cannot exceed the whole wall".to_string(),
        };

        let message = error.to_string();
        assert!(message.contains("target_fraction"));
        assert!(message.contains("1.5"));
        assert!(message.contains("cannot exceed the whole wall"));
    }
}
