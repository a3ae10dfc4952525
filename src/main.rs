use gl_sandbox::{alg, config, frame, input, lighting, mesh, obj_loader};
use log::{debug, info};

const USAGE: &str = "usage: gl_sandbox <mesh.obj> [config.ini]";

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() || args.len() > 2 {
        eprintln!("{}", USAGE);
        std::process::exit(2);
    }

    if let Err(e) = run(&args[0], args.get(1).map(String::as_str)) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Stand-in for one frame of window events
fn scripted_events(settings: &config::Settings) -> Vec<input::Event> {
    use input::{Event, MouseButton};

    vec![
        Event::Resized { width: settings.width, height: settings.height },
        Event::CursorMoved { x: 400., y: 300. },
        Event::MouseButton { button: MouseButton::Left, pressed: true },
        Event::CursorMoved { x: 440., y: 320. },
        Event::MouseButton { button: MouseButton::Left, pressed: false },
        Event::MouseButton { button: MouseButton::Right, pressed: true },
        Event::CursorMoved { x: 440., y: 520. },
        Event::MouseButton { button: MouseButton::Right, pressed: false },
    ]
}

fn run(mesh_path: &str, config_path: Option<&str>) -> gl_sandbox::Result<()> {
    let settings = match config_path {
        Some(path) => config::Settings::load(path)?,
        None => config::Settings::default(),
    };

    debug!("{:?}", settings);

    let model_data = obj_loader::load_obj_merged(mesh_path)?;

    let bounds = model_data.bounds().ok_or_else(|| gl_sandbox::Error::Degenerate(
        "mesh has no vertices"
    ))?;

    info!("Mesh bounds: min {} max {}", bounds.min, bounds.max);

    let model = mesh::fit_model_matrix(&bounds, mesh::FitMode::UnitBox, 0.0);
    info!("Floor height: {}", mesh::floor_height(&bounds, &model));

    let mut camera = settings.orbit_camera()?;
    let mut projection = settings.projection();
    let mut input = input::Manager::new();

    for event in scripted_events(&settings) {
        input.handle(event, &mut camera, &mut projection);
    }

    input.increment_key_states();

    info!(
        "Camera: distance {} yaw {} pitch {} eye {}",
        camera.distance,
        camera.yaw,
        camera.pitch,
        camera.eye(),
    );

    let matrices = frame::FrameMatrices::from_camera(
        &camera,
        &projection,
        model,
        settings.strict,
    )?;

    let light = lighting::Light::default();
    info!(
        "Light in view space: {}",
        light.position_in_view(&matrices.view),
    );

    let center = matrices.mvp.transform_point_projective(alg::Vec3::zero());
    info!("Model origin in NDC: {}", center);

    println!("{}", matrices.mvp);

    Ok(())
}
