//! MOT Deck entry point
//!
//! Handles platform-specific initialization and runs the presentation shell.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlElement, KeyboardEvent, MouseEvent};

    use mot_deck::consts::*;
    use mot_deck::deck::Deck;
    use mot_deck::sim::{self, MotState, Snapshot};

    const HUD_PREFIX: &str = "MOT SIMULATION v2.4";
    const HUD_IDENTIFY: &str = "IDENTIFICACIÓN";
    const HUD_TRACK: &str = "RASTREO";
    const CAPTION_IDENTIFY: &str = "Fase 1: Identifique el objetivo";
    const CAPTION_TRACK: &str = "Fase 2: Rastree el movimiento...";
    const TARGET_LABEL: &str = "OBJETIVO";

    /// Presentation shell state
    struct App {
        deck: Deck,
        /// Demo running on the MOT slide, if that slide is on screen
        mot: Option<MotInstance>,
    }

    impl App {
        fn new() -> Self {
            Self {
                deck: Deck::new(),
                mot: None,
            }
        }
    }

    /// One mounted MOT demo.
    ///
    /// Owns its animation-frame loop and its phase timer; both are cancelled
    /// and their closures dropped in `unmount`, so nothing fires after the
    /// viewer leaves the slide.
    struct MotInstance {
        state: Rc<RefCell<MotState>>,
        alive: Rc<Cell<bool>>,
        frame_id: Rc<Cell<i32>>,
        timer_id: Rc<Cell<i32>>,
        // Self-referential callbacks; kept here (not forgotten) so unmount
        // can break the Rc cycles by taking them
        frame_closure: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
        timer_closure: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
        arena: Element,
    }

    /// DOM nodes the demo repaints every frame
    struct ArenaDom {
        discs: Vec<HtmlElement>,
        hud: HtmlElement,
        caption: HtmlElement,
    }

    impl MotInstance {
        /// Build the arena DOM and start both loops.
        fn mount(document: &Document, arena: Element) -> Result<Self, JsValue> {
            let seed = js_sys::Date::now() as u64;
            let state = Rc::new(RefCell::new(MotState::new(seed)));
            log::info!("MOT demo mounted with seed: {seed}");

            let dom = build_arena_dom(document, &arena)?;
            paint(&state.borrow().snapshot(), &dom);

            let instance = Self {
                state,
                alive: Rc::new(Cell::new(true)),
                frame_id: Rc::new(Cell::new(0)),
                timer_id: Rc::new(Cell::new(0)),
                frame_closure: Rc::new(RefCell::new(None)),
                timer_closure: Rc::new(RefCell::new(None)),
                arena,
            };
            instance.start_frame_loop(dom)?;
            instance.arm_phase_timer()?;
            Ok(instance)
        }

        /// Frame loop: one sim tick plus a repaint per animation frame.
        fn start_frame_loop(&self, dom: ArenaDom) -> Result<(), JsValue> {
            let alive = self.alive.clone();
            let state = self.state.clone();
            let frame_id = self.frame_id.clone();
            let handle = self.frame_closure.clone();

            let inner_handle = handle.clone();
            *handle.borrow_mut() = Some(Closure::new(move |_time: f64| {
                if !alive.get() {
                    return;
                }
                let snapshot = {
                    let mut s = state.borrow_mut();
                    sim::tick(&mut s);
                    s.snapshot()
                };
                paint(&snapshot, &dom);
                if let Some(cb) = inner_handle.borrow().as_ref() {
                    frame_id.set(request_frame(cb));
                }
            }));

            if let Some(cb) = handle.borrow().as_ref() {
                self.frame_id.set(request_frame(cb));
            }
            Ok(())
        }

        /// Phase timer: 3 s identification, 5 s tracking, re-armed on every
        /// transition. Independent of the frame loop; the next repaint picks
        /// up the new phase.
        fn arm_phase_timer(&self) -> Result<(), JsValue> {
            let alive = self.alive.clone();
            let state = self.state.clone();
            let timer_id = self.timer_id.clone();
            let handle = self.timer_closure.clone();

            let inner_handle = handle.clone();
            *handle.borrow_mut() = Some(Closure::new(move || {
                if !alive.get() {
                    return;
                }
                let next_delay = {
                    let mut s = state.borrow_mut();
                    s.advance_phase();
                    s.phase.duration_ms()
                };
                if let Some(cb) = inner_handle.borrow().as_ref() {
                    timer_id.set(set_timeout(cb, next_delay));
                }
            }));

            let first_delay = self.state.borrow().phase.duration_ms();
            if let Some(cb) = handle.borrow().as_ref() {
                self.timer_id.set(set_timeout(cb, first_delay));
            }
            Ok(())
        }

        /// Stop both loops synchronously and clear the arena.
        fn unmount(self) {
            self.alive.set(false);
            let window = web_sys::window().unwrap();
            let _ = window.cancel_animation_frame(self.frame_id.get());
            window.clear_timeout_with_handle(self.timer_id.get());
            // Break the closure cycles so the instance is actually dropped
            self.frame_closure.borrow_mut().take();
            self.timer_closure.borrow_mut().take();
            self.arena.set_inner_html("");
            log::info!("MOT demo unmounted");
        }
    }

    fn request_frame(cb: &Closure<dyn FnMut(f64)>) -> i32 {
        web_sys::window()
            .unwrap()
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .unwrap_or(0)
    }

    fn set_timeout(cb: &Closure<dyn FnMut()>, delay_ms: i32) -> i32 {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                delay_ms,
            )
            .unwrap_or(0)
    }

    /// Create the HUD line, the 8 discs (target first, carrying its label),
    /// and the phase caption inside the arena element.
    fn build_arena_dom(document: &Document, arena: &Element) -> Result<ArenaDom, JsValue> {
        arena.set_inner_html("");

        let hud: HtmlElement = document.create_element("div")?.dyn_into()?;
        hud.set_class_name("mot-hud");
        arena.append_child(&hud)?;

        let mut discs = Vec::with_capacity(DISC_COUNT);
        for i in 0..DISC_COUNT {
            let disc: HtmlElement = document.create_element("div")?.dyn_into()?;
            disc.set_class_name(if i == 0 { "mot-disc mot-target" } else { "mot-disc" });
            disc.style()
                .set_property("width", &format!("{DISC_SIZE_PCT}%"))?;
            if i == 0 {
                let label: HtmlElement = document.create_element("span")?.dyn_into()?;
                label.set_class_name("mot-label");
                label.set_text_content(Some(TARGET_LABEL));
                disc.append_child(&label)?;
            }
            arena.append_child(&disc)?;
            discs.push(disc);
        }

        let caption: HtmlElement = document.create_element("div")?.dyn_into()?;
        caption.set_class_name("mot-caption");
        arena.append_child(&caption)?;

        Ok(ArenaDom { discs, hud, caption })
    }

    /// Repaint the arena from one consistent snapshot.
    fn paint(snapshot: &Snapshot, dom: &ArenaDom) {
        for (view, el) in snapshot.discs.iter().zip(dom.discs.iter()) {
            let style = el.style();
            let _ = style.set_property("left", &format!("{:.3}%", view.pos.x));
            let _ = style.set_property("top", &format!("{:.3}%", view.pos.y));
            if view.is_target {
                let _ = el.class_list().toggle_with_force("revealed", snapshot.visible);
            }
        }

        let hud_phase = if snapshot.visible { HUD_IDENTIFY } else { HUD_TRACK };
        dom.hud
            .set_text_content(Some(&format!("{HUD_PREFIX} [{hud_phase}]")));
        let _ = dom.hud.class_list().toggle_with_force("revealed", snapshot.visible);

        let caption = if snapshot.visible { CAPTION_IDENTIFY } else { CAPTION_TRACK };
        dom.caption.set_text_content(Some(caption));
        let _ = dom
            .caption
            .class_list()
            .toggle_with_force("revealed", snapshot.visible);
    }

    /// Paint the current slide and (un)mount the demo as needed.
    fn render_slide(app: &mut App, document: &Document) {
        // Leaving any slide tears the demo down; the MOT slide gets a fresh
        // instance below
        if let Some(instance) = app.mot.take() {
            instance.unmount();
        }

        let slide = app.deck.slide();

        if let Some(el) = document.get_element_by_id("slide-header") {
            match (slide.title, slide.subtitle) {
                (None, None) => {
                    el.set_inner_html("");
                    let _ = el.set_attribute("class", "hidden");
                }
                (title, subtitle) => {
                    let _ = el.set_attribute("class", "");
                    let mut html = String::new();
                    if let Some(t) = title {
                        html.push_str(&format!("<h2>{t}</h2>"));
                    }
                    if let Some(s) = subtitle {
                        html.push_str(&format!("<h3>{s}</h3>"));
                    }
                    el.set_inner_html(&html);
                }
            }
        }

        if let Some(el) = document.get_element_by_id("slide-body") {
            el.set_inner_html(slide.body_html);
        }

        if let Some(el) = document.get_element_by_id("progress-fill") {
            if let Ok(el) = el.dyn_into::<HtmlElement>() {
                let _ = el
                    .style()
                    .set_property("width", &format!("{}%", app.deck.progress() * 100.0));
            }
        }

        if let Some(el) = document.get_element_by_id("nav-counter") {
            el.set_text_content(Some(&format!(
                "{} / {}",
                app.deck.current(),
                app.deck.total()
            )));
        }

        set_disabled(document, "nav-prev", app.deck.current() == 1);
        set_disabled(document, "nav-next", app.deck.current() == app.deck.total());

        if app.deck.shows_simulation() {
            match document.get_element_by_id("mot-arena") {
                Some(arena) => match MotInstance::mount(document, arena) {
                    Ok(instance) => app.mot = Some(instance),
                    Err(e) => log::error!("Failed to mount MOT demo: {e:?}"),
                },
                None => log::error!("MOT slide is missing its #mot-arena mount point"),
            }
        }

        log::info!("Showing slide {} / {}", app.deck.current(), app.deck.total());
    }

    fn set_disabled(document: &Document, id: &str, disabled: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            if disabled {
                let _ = el.set_attribute("disabled", "");
            } else {
                let _ = el.remove_attribute("disabled");
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("MOT Deck starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let app = Rc::new(RefCell::new(App::new()));
        render_slide(&mut app.borrow_mut(), &document);

        setup_nav_handlers(&document, app.clone());
        setup_fullscreen_button(&document);

        log::info!("MOT Deck running!");
    }

    fn setup_nav_handlers(document: &Document, app: Rc<RefCell<App>>) {
        // Keyboard: ArrowRight/Space forward, ArrowLeft back
        {
            let app = app.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let document = web_sys::window().unwrap().document().unwrap();
                let mut app = app.borrow_mut();
                match event.key().as_str() {
                    "ArrowRight" | " " => {
                        if app.deck.next() {
                            render_slide(&mut app, &document);
                        }
                    }
                    "ArrowLeft" => {
                        if app.deck.prev() {
                            render_slide(&mut app, &document);
                        }
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Previous button
        if let Some(btn) = document.get_element_by_id("nav-prev") {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let document = web_sys::window().unwrap().document().unwrap();
                let mut app = app.borrow_mut();
                if app.deck.prev() {
                    render_slide(&mut app, &document);
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Next button
        if let Some(btn) = document.get_element_by_id("nav-next") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let document = web_sys::window().unwrap().document().unwrap();
                let mut app = app.borrow_mut();
                if app.deck.next() {
                    render_slide(&mut app, &document);
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_fullscreen_button(document: &Document) {
        if let Some(btn) = document.get_element_by_id("nav-fullscreen") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let document = web_sys::window().unwrap().document().unwrap();
                if document.fullscreen_element().is_none() {
                    if let Some(root) = document.document_element() {
                        let _ = root.request_fullscreen();
                    }
                } else {
                    document.exit_fullscreen();
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("MOT Deck (native) starting...");
    log::info!("The deck needs a browser - run with `trunk serve` for the web version");

    println!("\nRunning headless MOT smoke check...");
    smoke_check();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive the simulation for ten seconds of frames and confirm every disc
/// stays inside the arena while the phase cycle behaves.
#[cfg(not(target_arch = "wasm32"))]
fn smoke_check() {
    use mot_deck::consts::ARENA_MAX;
    use mot_deck::sim::{self, MotState, phase_at};
    use std::time::{SystemTime, UNIX_EPOCH};

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut state = MotState::new(seed);

    for frame in 0..600u32 {
        sim::tick(&mut state);
        for disc in &state.discs {
            assert!(
                disc.pos.x >= 0.0
                    && disc.pos.x <= ARENA_MAX
                    && disc.pos.y >= 0.0
                    && disc.pos.y <= ARENA_MAX,
                "disc {} escaped the arena at frame {}",
                disc.id,
                frame
            );
        }
        if frame % 60 == 0 {
            // Approximate wall clock at 60 fps for the phase readout
            let phase = phase_at(frame as f32 / 60.0);
            let target = state.target();
            println!(
                "t={:>2}s phase={:?} target=({:.1}, {:.1})",
                frame / 60,
                phase,
                target.pos.x,
                target.pos.y
            );
        }
    }
    println!("✓ MOT smoke check passed (seed {seed})");
}
