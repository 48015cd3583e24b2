use cube_demos::mesh::{load_obj_file, parse_obj, ObjError};
use glam::Vec3;
use std::path::PathBuf;

const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

#[cfg(test)]
mod obj_loading_tests {
    use super::*;

    #[test]
    fn test_quad_file_loads_as_two_triangles() {
        let mesh = load_obj_file(data_path("quad.obj"), RED).unwrap();

        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.vertices.len(), 4);
        for v in &mesh.vertices {
            assert_eq!(v.normal, [0.0, 1.0, 0.0]);
            assert_eq!(v.color, RED);
        }

        let bounds = mesh.bounds().unwrap();
        assert_eq!(bounds.min, Vec3::new(-0.5, 0.0, -0.5));
        assert_eq!(bounds.max, Vec3::new(0.5, 0.0, 0.5));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_obj_file(data_path("does_not_exist.obj"), RED).unwrap_err();
        assert!(format!("{err:#}").contains("does_not_exist.obj"));
    }

    #[test]
    fn test_faces_without_normals_get_flat_normals() {
        let source = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
        let mesh = parse_obj(source, RED).unwrap();

        assert_eq!(mesh.indices, vec![0, 1, 2]);
        for v in &mesh.vertices {
            assert_eq!(v.normal, [0.0, 0.0, 1.0]);
        }
    }

    #[test]
    fn test_negative_indices_count_from_the_end() {
        let source = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf -3 -2 -1\n";
        let relative = parse_obj(source, RED).unwrap();
        let absolute = parse_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n", RED).unwrap();
        assert_eq!(relative, absolute);
    }

    #[test]
    fn test_errors_name_the_line() {
        assert_eq!(
            parse_obj("v 0 0 0\nv 1 0 0\nf 1 2\n", RED),
            Err(ObjError::FaceTooSmall { line: 3, found: 2 })
        );
        assert_eq!(
            parse_obj("v 0 0\n", RED),
            Err(ObjError::MissingComponents {
                line: 1,
                keyword: "v",
                found: 2
            })
        );
        assert_eq!(
            parse_obj("v 0 0 0\nf 1 2 3\n", RED),
            Err(ObjError::IndexOutOfRange {
                line: 2,
                kind: "vertex",
                index: 2
            })
        );
        assert!(matches!(
            parse_obj("v 0 zero 0\n", RED),
            Err(ObjError::InvalidNumber { line: 1, .. })
        ));
    }
}
