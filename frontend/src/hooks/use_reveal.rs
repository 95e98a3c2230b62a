use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use super::{delay_ms, now};
use crate::reveal::visibility::visible_fraction;
use crate::reveal::{
    Capability, ElementId, ObserveOptions, RevealConfig, RevealEngine, RevealError, Visibility,
};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// What a section needs to render a staggered group: attach `node` to the
/// container and use `class(i)` / `style()` on member `i`.
#[derive(Clone, PartialEq)]
pub struct RevealHandle {
    pub node: NodeRef,
    pub states: Vec<Visibility>,
    config: RevealConfig,
}

impl RevealHandle {
    pub fn state(&self, index: usize) -> Visibility {
        self.states
            .get(index)
            .copied()
            .unwrap_or(Visibility::Visible)
    }

    pub fn shown(&self, index: usize) -> bool {
        self.state(index).is_shown()
    }

    pub fn class(&self, index: usize) -> Classes {
        classes!(
            "reveal",
            self.config.style.class(),
            self.shown(index).then(|| "reveal--shown")
        )
    }

    pub fn style(&self) -> String {
        format!(
            "transition-duration: {}ms; transition-timing-function: {};",
            self.config.stagger.duration_ms,
            self.config.stagger.easing.css()
        )
    }
}

struct Driver {
    engine: RefCell<RevealEngine>,
    timer: RefCell<Option<Timeout>>,
    container: ElementId,
    publish: Callback<Vec<Visibility>>,
}

impl Driver {
    fn publish(&self) {
        self.publish.emit(self.engine.borrow().states(self.container));
    }

    fn pump(self: &Rc<Self>, at: f64) {
        if self.engine.borrow_mut().advance(at) {
            self.publish();
        }
        self.arm();
    }

    /// Schedules a single timeout for the next state change, replacing any
    /// pending one.
    fn arm(self: &Rc<Self>) {
        let deadline = self.engine.borrow().next_deadline();
        let timeout = deadline.map(|deadline| {
            let weak: Weak<Self> = Rc::downgrade(self);
            Timeout::new(delay_ms(deadline, now()), move || {
                if let Some(driver) = weak.upgrade() {
                    driver.pump(now().max(deadline));
                }
            })
        });
        *self.timer.borrow_mut() = timeout;
    }

    fn intersect(self: &Rc<Self>, ratio: f64, at: f64) -> bool {
        let triggered = self
            .engine
            .borrow_mut()
            .on_intersection(self.container, ratio, at);
        if triggered {
            debug!("reveal group {} triggered", self.container);
            self.pump(at);
        }
        triggered
    }

    fn is_triggered(&self) -> bool {
        self.engine.borrow().is_triggered(self.container)
    }
}

/// Keeps the observer and timer alive for one mounted group.
struct Session {
    driver: Rc<Driver>,
    observer: Option<(IntersectionObserver, ObserverCallback)>,
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Some((observer, _)) = self.observer.take() {
            observer.disconnect();
        }
        self.driver.timer.borrow_mut().take();
    }
}

fn observer_supported() -> bool {
    web_sys::window()
        .map(|window| {
            js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
                .unwrap_or(false)
        })
        .unwrap_or(false)
}

fn initial_ratio(element: &Element) -> f64 {
    let rect = element.get_bounding_client_rect();
    let viewport_height = web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    visible_fraction(rect.top(), rect.height(), viewport_height)
}

fn observe(
    driver: &Rc<Driver>,
    element: &Element,
    options: ObserveOptions,
) -> Result<(IntersectionObserver, ObserverCallback), RevealError> {
    let weak = Rc::downgrade(driver);
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let Some(driver) = weak.upgrade() else {
                return;
            };
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let ratio = if entry.is_intersecting() {
                    entry.intersection_ratio()
                } else {
                    0.0
                };
                if driver.intersect(ratio, now()) && options.once {
                    observer.unobserve(&entry.target());
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(|err| RevealError::ObserverRejected(format!("{:?}", err)))?;
    observer.observe(element);
    Ok((observer, callback))
}

fn start(
    node: &NodeRef,
    len: usize,
    config: RevealConfig,
    publish: Callback<Vec<Visibility>>,
) -> Session {
    let at = now();
    let element = node.cast::<Element>();
    let capability = if element.is_some() && observer_supported() {
        Capability::Available
    } else {
        if element.is_some() {
            warn!("{}; revealing immediately", RevealError::ObserverUnavailable);
        }
        Capability::Unavailable
    };
    let ratio = element.as_ref().map(initial_ratio).unwrap_or(1.0);

    let mut engine = RevealEngine::new(config.observe, capability);
    let container = engine.watch_group(config.stagger, len, ratio, at);
    let driver = Rc::new(Driver {
        engine: RefCell::new(engine),
        timer: RefCell::new(None),
        container,
        publish,
    });
    driver.publish();
    driver.arm();

    let options = driver.engine.borrow().options();
    let needs_observer =
        capability == Capability::Available && !(options.once && driver.is_triggered());
    let observer = match element {
        Some(element) if needs_observer => match observe(&driver, &element, options) {
            Ok(observer) => Some(observer),
            Err(err) => {
                warn!("{}; revealing immediately", err);
                driver.intersect(1.0, at);
                None
            }
        },
        _ => None,
    };

    Session { driver, observer }
}

/// Reveals `len` members of the container bound to the returned `node` as it
/// scrolls into view, staggered per `config`.
#[hook]
pub fn use_reveal_group(len: usize, config: RevealConfig) -> RevealHandle {
    let node = use_node_ref();
    let states = use_state_eq(|| vec![Visibility::Unseen; len]);
    {
        let node = node.clone();
        let setter = states.setter();
        let publish = Callback::from(move |next: Vec<Visibility>| setter.set(next));
        use_effect_with_deps(
            move |(len, config)| {
                let session = start(&node, *len, *config, publish);
                move || drop(session)
            },
            (len, config),
        );
    }
    RevealHandle {
        node,
        states: (*states).clone(),
        config,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::{Easing, RevealStyle, StaggerConfig};

    fn handle(states: Vec<Visibility>) -> RevealHandle {
        RevealHandle {
            node: NodeRef::default(),
            states,
            config: RevealConfig::default()
                .with_style(RevealStyle::SlideLeft)
                .with_stagger(
                    StaggerConfig::default()
                        .with_duration(500.0)
                        .with_easing(Easing::Linear),
                ),
        }
    }

    #[test]
    fn classes_follow_the_member_state() {
        let handle = handle(vec![Visibility::Entering, Visibility::Unseen]);
        assert_eq!(
            handle.class(0),
            classes!("reveal", "reveal--slide-left", "reveal--shown")
        );
        assert_eq!(handle.class(1), classes!("reveal", "reveal--slide-left"));
    }

    #[test]
    fn members_past_the_end_render_shown() {
        assert!(handle(Vec::new()).shown(3));
    }

    #[test]
    fn style_carries_duration_and_easing() {
        assert_eq!(
            handle(Vec::new()).style(),
            "transition-duration: 500ms; transition-timing-function: linear;"
        );
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    use super::*;
    use crate::reveal::StaggerConfig;

    type Recorded = (Rc<Cell<usize>>, Rc<RefCell<Vec<Visibility>>>);

    fn recorder() -> (Recorded, Callback<Vec<Visibility>>) {
        let count = Rc::new(Cell::new(0));
        let last = Rc::new(RefCell::new(Vec::new()));
        let publish = {
            let count = count.clone();
            let last = last.clone();
            Callback::from(move |states: Vec<Visibility>| {
                count.set(count.get() + 1);
                *last.borrow_mut() = states;
            })
        };
        ((count, last), publish)
    }

    fn quick() -> RevealConfig {
        RevealConfig::default().with_stagger(
            StaggerConfig::default()
                .with_step(0.0)
                .with_duration(40.0),
        )
    }

    #[wasm_bindgen_test]
    async fn mounted_group_finishes_its_transition() {
        let ((count, last), publish) = recorder();
        let session = start(&NodeRef::default(), 2, quick(), publish);
        assert_eq!(*last.borrow(), vec![Visibility::Entering; 2]);

        TimeoutFuture::new(120).await;
        assert!(count.get() >= 2);
        assert_eq!(*last.borrow(), vec![Visibility::Visible; 2]);
        drop(session);
    }

    #[wasm_bindgen_test]
    async fn unmounting_mid_transition_stops_publishing() {
        let ((count, last), publish) = recorder();
        let session = start(&NodeRef::default(), 2, quick(), publish);
        assert_eq!(count.get(), 1);
        assert!(session.driver.timer.borrow().is_some());

        drop(session);
        TimeoutFuture::new(120).await;
        assert_eq!(count.get(), 1);
        assert_eq!(*last.borrow(), vec![Visibility::Entering; 2]);
    }
}
