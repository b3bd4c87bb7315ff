use proptest::prelude::*;
use streamgrid::core::cluster::paths::{self, WorkerTokenServiceType};

// Identifiers the way callers actually shape them: separator-free tokens.
const ID: &str = "[A-Za-z0-9._-]{1,24}";

proptest! {
    #[test]
    fn category_paths_are_rooted_and_keep_the_id(id in ID) {
        for (path, root) in [
            (paths::supervisor_path(&id), "/supervisors/"),
            (paths::assignment_path(&id), "/assignments/"),
            (paths::storm_path(&id), "/storms/"),
            (paths::nimbus_path(&id), "/nimbuses/"),
            (paths::blobstore_path(&id), "/blobstore/"),
            (paths::credentials_path(&id), "/credentials/"),
            (paths::log_config_path(&id), "/logconfigs/"),
        ] {
            prop_assert!(path.starts_with(root));
            prop_assert_eq!(&path[root.len()..], id.as_str());
            prop_assert!(!path.ends_with('/'));
        }
    }

    #[test]
    fn workerbeat_segments_appear_in_argument_order(
        storm in ID,
        node in ID,
        port in 1024u16..,
    ) {
        let path = paths::workerbeat_path(&storm, &node, port);
        let segments: Vec<&str> = path.split('/').collect();
        prop_assert_eq!(segments.len(), 4);
        prop_assert_eq!(segments[0], "");
        prop_assert_eq!(segments[1], "workerbeats");
        prop_assert_eq!(segments[2], storm.as_str());
        let node_port = format!("{node}-{port}");
        prop_assert_eq!(segments[3], node_port.as_str());
    }

    #[test]
    fn encoded_error_components_stay_one_segment(storm in ID, component in ".{1,20}") {
        let path = paths::error_path(&storm, &component);
        // Whatever the component contains, encoding keeps it a single
        // segment under the topology's error subtree.
        prop_assert_eq!(path.split('/').count(), 4);
        let error_root = format!("/errors/{storm}/");
        prop_assert!(path.starts_with(&error_root));
        prop_assert_eq!(
            paths::last_error_path(&storm, &component),
            format!("{path}-last-error")
        );
    }

    #[test]
    fn secret_key_versions_are_distinct_children(
        topo in ID,
        v1 in any::<u64>(),
        v2 in any::<u64>(),
    ) {
        prop_assume!(v1 != v2);
        let base = paths::secret_keys_path(WorkerTokenServiceType::Nimbus, &topo);
        let p1 = paths::secret_key_version_path(WorkerTokenServiceType::Nimbus, &topo, v1);
        let p2 = paths::secret_key_version_path(WorkerTokenServiceType::Nimbus, &topo, v2);
        prop_assert_ne!(&p1, &p2);
        let base_prefix = format!("{base}/");
        prop_assert!(p1.starts_with(&base_prefix));
        prop_assert!(p2.starts_with(&base_prefix));
    }
}
