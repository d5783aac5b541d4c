#[cfg(test)]
mod monitor_tests {
    use std::path::Path;
    use std::sync::Arc;
    use std::time::Duration;
    use crate::monitor::monitor::ReloadTarget;
    use crate::monitor::structs::file_monitor::FileMonitor;
    use crate::monitor::structs::monitor_stats::MonitorStats;
    use crate::store::enums::load_error::LoadError;

    struct RejectingTarget;

    impl ReloadTarget for RejectingTarget {
        fn reload(&self, path: &Path) -> Result<(), LoadError> {
            Err(LoadError::Corrupt(path.display().to_string()))
        }
    }

    #[test]
    fn test_monitor_stats_new() {
        let stats = MonitorStats::new();
        assert_eq!(stats.completed_reloads(), 0);
        assert_eq!(stats.failed_reloads(), 0);
        assert!(stats.last_failure().is_none());
    }

    #[test]
    fn test_monitor_stats_record_success() {
        let stats = MonitorStats::new();
        stats.record_success();
        stats.record_success();
        assert_eq!(stats.completed_reloads(), 2);
        assert_eq!(stats.failed_reloads(), 0);
        assert!(stats.last_failure().is_none());
    }

    #[test]
    fn test_monitor_stats_record_failure() {
        let stats = MonitorStats::new();
        stats.record_failure(LoadError::NotFound(String::from("/tmp/gone")));
        stats.record_failure(LoadError::Corrupt(String::from("bad magic")));
        assert_eq!(stats.failed_reloads(), 2);
        match stats.last_failure() {
            Some(LoadError::Corrupt(message)) => assert_eq!(message, "bad magic"),
            other => panic!("Expected last failure to be Corrupt, got {:?}", other),
        }
    }

    #[test]
    fn test_monitor_stats_shared_across_threads() {
        use std::thread;

        let stats = Arc::new(MonitorStats::new());
        let mut handles = vec![];
        for _ in 0..10 {
            let stats_clone: Arc<MonitorStats> = Arc::clone(&stats);
            let handle = thread::spawn(move || {
                stats_clone.record_success();
                stats_clone.record_failure(LoadError::NotFound(String::from("x")));
            });
            handles.push(handle);
        }
        for handle in handles {
            handle.join().expect("Thread should not panic");
        }
        assert_eq!(stats.completed_reloads(), 10);
        assert_eq!(stats.failed_reloads(), 10);
    }

    #[test]
    fn test_file_monitor_new() {
        let monitor = FileMonitor::new(
            "/etc/credstore/keystore.toml",
            Duration::from_secs(5),
            Arc::new(RejectingTarget),
        );
        assert_eq!(monitor.path(), Path::new("/etc/credstore/keystore.toml"));
        assert_eq!(monitor.interval, Duration::from_secs(5));
        assert_eq!(monitor.stats().failed_reloads(), 0);
    }

    #[test]
    fn test_file_monitor_stats_handle_outlives_monitor() {
        let monitor = FileMonitor::new(
            "keystore.toml",
            Duration::from_secs(1),
            Arc::new(RejectingTarget),
        );
        let stats = monitor.stats();
        drop(monitor);
        assert_eq!(stats.failed_reloads(), 0);
    }
}
