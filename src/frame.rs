//! Per-frame matrix assembly

use log::warn;

use crate::alg;
use crate::camera;
use crate::error::Result;

/// Flat row-major matrices, ready for upload with transpose enabled
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct Uniforms {
    pub mvp:  [f32; 16],
    pub mv:   [f32; 16],
    pub view: [f32; 16],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameMatrices {
    pub projection: alg::Mat,
    pub view:       alg::Mat,
    pub model:      alg::Mat,
    pub mv:         alg::Mat,
    pub mvp:        alg::Mat,
}

impl FrameMatrices {
    pub fn compose(
        projection: alg::Mat,
        view: alg::Mat,
        model: alg::Mat,
    ) -> FrameMatrices {
        let mv = view * model;

        FrameMatrices {
            projection,
            view,
            model,
            mv,
            mvp: projection * mv,
        }
    }

    /// Build from camera state \
    /// In strict mode, degenerate camera or projection input is an error;
    /// otherwise non-finite results pass through with a warning.
    pub fn from_camera(
        orbit: &camera::OrbitCamera,
        projection: &camera::Projection,
        model: alg::Mat,
        strict: bool,
    ) -> Result<FrameMatrices> {
        if strict {
            return Ok(FrameMatrices::compose(
                projection.try_matrix()?,
                orbit.try_view()?,
                model,
            ));
        }

        let frame = FrameMatrices::compose(projection.matrix(), orbit.view(), model);

        if !frame.mvp.is_finite() {
            warn!(
                "Non-finite MVP (distance {}, yaw {}, pitch {})",
                orbit.distance,
                orbit.yaw,
                orbit.pitch,
            );
        }

        Ok(frame)
    }

    /// Camera rotation only, so the cube stays centered on the eye
    pub fn skybox(
        orbit: &camera::OrbitCamera,
        projection: &camera::Projection,
    ) -> FrameMatrices {
        FrameMatrices::compose(
            projection.matrix(),
            orbit.skybox_view(),
            alg::Mat::identity(),
        )
    }

    pub fn uniforms(&self) -> Uniforms {
        Uniforms {
            mvp:  *self.mvp.data(),
            mv:   *self.mv.data(),
            view: *self.view.data(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn random_mat(rng: &mut impl Rng) -> alg::Mat {
        let mut cells = [0.0f32; 16];

        for cell in cells.iter_mut() {
            *cell = rng.gen_range(-2.0..2.0);
        }

        alg::Mat::from_rows(cells)
    }

    fn approx_mat(a: &alg::Mat, b: &alg::Mat) -> bool {
        a.data().iter()
            .zip(b.data().iter())
            .all(|(x, y)| (x - y).abs() < 0.001)
    }

    #[test]
    fn compose_order() {
        let mut rng = rand::thread_rng();

        for _ in 0..32 {
            let projection = random_mat(&mut rng);
            let view = random_mat(&mut rng);
            let model = random_mat(&mut rng);

            let frame = FrameMatrices::compose(projection, view, model);

            assert!(approx_mat(&frame.mv, &(view * model)));
            assert!(approx_mat(&frame.mvp, &(projection * (view * model))));
        }
    }

    #[test]
    fn uniforms_are_row_major() {
        let model = alg::Mat::translation(1., 2., 3.);
        let frame = FrameMatrices::compose(
            alg::Mat::identity(),
            alg::Mat::identity(),
            model,
        );

        let uniforms = frame.uniforms();
        assert!(uniforms.mvp[3] == 1.);
        assert!(uniforms.mvp[7] == 2.);
        assert!(uniforms.mvp[11] == 3.);
        assert!(uniforms.view == *alg::Mat::identity().data());
    }

    #[test]
    fn origin_projects_to_screen_center() {
        let mut orbit = camera::OrbitCamera::default();
        orbit.distance = 3.;
        orbit.yaw = 0.7;
        orbit.pitch = 0.3;

        let frame = FrameMatrices::from_camera(
            &orbit,
            &camera::Projection::default(),
            alg::Mat::identity(),
            true,
        ).unwrap();

        let ndc = frame.mvp.transform_point_projective(alg::Vec3::zero());
        eprintln!("{}", ndc);

        assert!(ndc.x.abs() < 0.0001 && ndc.y.abs() < 0.0001);
        assert!(ndc.z > -1. && ndc.z < 1.);
    }

    #[test]
    fn strict_rejects_degenerate_camera() {
        let mut orbit = camera::OrbitCamera::default();
        orbit.distance = 0.;

        let projection = camera::Projection::default();
        let model = alg::Mat::identity();

        assert!(FrameMatrices::from_camera(&orbit, &projection, model, true).is_err());

        // Lenient mode passes NaN through
        let frame = FrameMatrices::from_camera(&orbit, &projection, model, false).unwrap();
        assert!(!frame.mvp.is_finite());
    }

    #[test]
    fn skybox_ignores_distance() {
        let mut near = camera::OrbitCamera::default();
        near.yaw = 1.2;
        near.pitch = -0.4;

        let mut far = near;
        far.distance = 50.;

        let projection = camera::Projection::default();

        assert!(approx_mat(
            &FrameMatrices::skybox(&near, &projection).mvp,
            &FrameMatrices::skybox(&far, &projection).mvp,
        ));
    }
}
