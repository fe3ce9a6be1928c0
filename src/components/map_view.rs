//! Map pane with a fallback ladder: invalid coordinates outrank a missing
//! token, which outranks a widget runtime error. The live widget mounts
//! once (one-way latch) and later center changes re-center it in place.

use leptos::*;

use crate::map::{
    access_token, resolve_center, CenterInput, MapHandle, MarkerSpec, ResolvedCenter,
};

struct MapInstance {
    handle: MapHandle,
}

#[component]
pub fn MapView(
    #[prop(into)] center: Signal<Option<CenterInput>>,
    #[prop(optional)] markers: Vec<MarkerSpec>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let resolved = create_memo(move |_| resolve_center(center.get().as_ref()));
    let failed = create_rw_signal(false);
    let container: NodeRef<html::Div> = create_node_ref();
    let instance = store_value(None::<MapInstance>);
    let markers = store_value(markers);

    // One-way latch: set when the container first appears, never reset.
    let mounted = create_rw_signal(false);
    create_effect(move |_| {
        if container.get().is_some() {
            mounted.set(true);
        }
    });

    create_effect(move |_| {
        if !mounted.get() || failed.get() {
            return;
        }
        let ResolvedCenter::Valid(valid_center) = resolved.get() else {
            return;
        };
        let Some(token) = access_token() else {
            return;
        };
        let already_attached = instance.with_value(Option::is_some);
        if already_attached {
            // Center updates re-center the existing widget; no remount.
            instance.with_value(|instance| {
                if let Some(instance) = instance {
                    instance.handle.recenter(valid_center);
                }
            });
            return;
        }
        let Some(el) = container.get() else {
            return;
        };
        let attached = markers.with_value(|markers| {
            MapHandle::attach(&el, token, valid_center, markers, move |error| {
                log::warn!("map widget error: {error}");
                failed.set(true);
            })
        });
        match attached {
            Ok(handle) => instance.set_value(Some(MapInstance { handle })),
            Err(error) => {
                log::warn!("map widget failed to attach: {error}");
                failed.set(true);
            }
        }
    });

    // A runtime failure swaps in the error placeholder and tears down the
    // dead widget.
    create_effect(move |_| {
        if failed.get() {
            instance.update_value(|instance| {
                if let Some(instance) = instance.take() {
                    instance.handle.destroy();
                }
            });
        }
    });

    on_cleanup(move || {
        instance.update_value(|instance| {
            if let Some(instance) = instance.take() {
                instance.handle.destroy();
            }
        });
    });

    let overlay = children.map(|children| {
        view! { <div class="absolute top-0 left-0 z-10">{children()}</div> }
    });

    view! {
        <div class="relative w-full h-full">
            {move || match resolved.get() {
                ResolvedCenter::Invalid => {
                    view! {
                        <div class="w-full h-full flex items-center justify-center bg-gray-100 text-gray-500">
                            "Map unavailable"
                        </div>
                    }
                    .into_view()
                }
                ResolvedCenter::Valid(_) if access_token().is_none() => {
                    view! {
                        <div class="w-full h-full flex flex-col items-center justify-center bg-gray-100 text-gray-500 gap-2 px-6 text-center">
                            <span class="text-3xl">"🗺"</span>
                            <span>
                                "Map is not configured. Set "
                                <code class="text-xs bg-gray-200 px-1 rounded">
                                    "STAYNEST_MAPBOX_TOKEN"
                                </code>
                                " to show live maps."
                            </span>
                        </div>
                    }
                    .into_view()
                }
                ResolvedCenter::Valid(_) => {
                    view! {
                        <Show
                            when=move || !failed.get()
                            fallback=|| {
                                view! {
                                    <div class="w-full h-full flex items-center justify-center bg-gray-100 text-gray-500">
                                        "Map failed to load"
                                    </div>
                                }
                            }
                        >
                            <div node_ref=container class="w-full h-full"></div>
                        </Show>
                    }
                    .into_view()
                }
            }}
            {overlay}
        </div>
    }
}
