use mocktest::MockTestApp;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "MockTest",
        options,
        Box::new(|cc| Ok(Box::new(MockTestApp::from_creation_context(cc)))),
    )
}

/// Mounts the app on `#the_canvas_id`.
#[cfg(target_arch = "wasm32")]
fn main() {
    use wasm_bindgen::JsCast;

    eframe::WebLogger::init(log::LevelFilter::Info).ok();

    wasm_bindgen_futures::spawn_local(async {
        let canvas = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("the_canvas_id"))
            .expect("page has no #the_canvas_id")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("#the_canvas_id is not a canvas");

        let started = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| Ok(Box::new(MockTestApp::from_creation_context(cc)))),
            )
            .await;
        if let Err(err) = started {
            log::error!("failed to start eframe: {err:?}");
        }
    });
}
