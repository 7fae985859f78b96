/*
 * Copyright (c) arbor-rust contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Object registry and method dispatch of the mock engine.
//!
//! Objects live in a global registry behind a mutex, keyed by monotonically increasing instance
//! ids. Ids are never reused; a freed object keeps its (leaked) `HostObject` allocation so stale
//! pointers stay dereferenceable, but disappears from the id map, which is what the binding's
//! liveness checks observe.
//!
//! Signal fan-out collects the matching connections, releases the registry lock, and only then
//! invokes the callables: handlers re-enter the engine freely (variant conversions, refcount
//! bookkeeping, nested calls).

use std::collections::HashMap;
use std::ffi::c_void;
use std::sync::{Mutex, OnceLock};

use arbor::sys;

use super::values::{self, HostCallable, VariantValue};

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Class database

/// (class, base, refcounted)
const CLASSES: &[(&str, Option<&str>, bool)] = &[
    ("Object", None, false),
    ("RefCounted", Some("Object"), true),
    ("Resource", Some("RefCounted"), true),
    ("Font", Some("Resource"), true),
    ("FontFile", Some("Font"), true),
    ("Node", Some("Object"), false),
    ("CanvasItem", Some("Node"), false),
    ("Node2D", Some("CanvasItem"), false),
    ("Camera2D", Some("Node2D"), false),
    ("CpuParticles2D", Some("Node2D"), false),
    ("Control", Some("CanvasItem"), false),
    ("Tree", Some("Control"), false),
    ("Popup", Some("Control"), false),
    ("PopupMenu", Some("Popup"), false),
    ("Node3D", Some("Node"), false),
    ("PhysicsBody3D", Some("Node3D"), false),
    ("RigidBody3D", Some("PhysicsBody3D"), false),
    ("TreeItem", Some("Object"), false),
];

fn class_entry(name: &str) -> Option<&'static (&'static str, Option<&'static str>, bool)> {
    CLASSES.iter().find(|(class, _, _)| *class == name)
}

fn inherits(class: &str, base: &str) -> bool {
    let mut current = Some(class);
    while let Some(name) = current {
        if name == base {
            return true;
        }
        current = class_entry(name).and_then(|(_, parent, _)| *parent);
    }
    false
}

fn is_refcounted(class: &str) -> bool {
    inherits(class, "RefCounted")
}

/// Declared signals: (class, signal, parameter variant types).
const SIGNALS: &[(&str, &str, &[sys::AxiVariantType])] = &[
    ("Object", "property_list_changed", &[]),
    ("CanvasItem", "visibility_changed", &[]),
    ("Control", "resized", &[]),
    ("Control", "focus_entered", &[]),
    ("Popup", "popup_hide", &[]),
    ("PopupMenu", "id_pressed", &[sys::AXI_VARIANT_TYPE_INT]),
    ("PopupMenu", "index_pressed", &[sys::AXI_VARIANT_TYPE_INT]),
    ("CpuParticles2D", "finished", &[]),
    ("Resource", "changed", &[]),
    ("Tree", "item_selected", &[]),
    ("Tree", "item_activated", &[]),
    ("Tree", "cell_selected", &[]),
    (
        "Tree",
        "column_title_clicked",
        &[sys::AXI_VARIANT_TYPE_INT, sys::AXI_VARIANT_TYPE_INT],
    ),
    (
        "Tree",
        "item_mouse_selected",
        &[sys::AXI_VARIANT_TYPE_VECTOR2, sys::AXI_VARIANT_TYPE_INT],
    ),
    ("RigidBody3D", "body_entered", &[sys::AXI_VARIANT_TYPE_OBJECT]),
    ("RigidBody3D", "body_exited", &[sys::AXI_VARIANT_TYPE_OBJECT]),
    ("RigidBody3D", "sleeping_state_changed", &[]),
];

fn signal_params(class: &str, signal: &str) -> Option<&'static [sys::AxiVariantType]> {
    let mut current = Some(class);
    while let Some(name) = current {
        if let Some((_, _, params)) = SIGNALS
            .iter()
            .find(|(declaring, candidate, _)| *declaring == name && *candidate == signal)
        {
            return Some(params);
        }
        current = class_entry(name).and_then(|(_, parent, _)| *parent);
    }
    None
}

/// Registered methods: (declaring class, method, hash). `classdb_get_method_bind` hands out a bind
/// only on an exact triple match, like the real engine's extension hash check.
#[rustfmt::skip]
const METHODS: &[(&str, &str, i64)] = &[
    ("Object", "connect", 1424978103),
    ("Object", "disconnect", 1444855246),
    ("Object", "is_connected", 768266505),
    ("Object", "emit_signal", 4047014013),
    ("Object", "get_class", 3271202440),
    ("RefCounted", "init_ref", 2240911060),
    ("RefCounted", "reference", 2240911654),
    ("RefCounted", "unreference", 2240913787),
    ("RefCounted", "get_reference_count", 3036558113),
    ("Resource", "set_name", 3089850668),
    ("Resource", "get_name", 201670096),
    ("Resource", "emit_changed", 3218959716),
    ("Font", "get_font_name", 3118259104),
    ("Font", "get_height", 640077664),
    ("FontFile", "set_font_name", 827529717),
    ("FontFile", "load_bitmap_font", 166001499),
    ("FontFile", "load_dynamic_font", 166003217),
    ("FontFile", "set_antialiasing", 1669900),
    ("FontFile", "get_antialiasing", 4262718924),
    ("FontFile", "set_fixed_size", 1286410249),
    ("FontFile", "get_fixed_size", 3905245786),
    ("FontFile", "set_oversampling", 373806689),
    ("FontFile", "get_oversampling", 1740695150),
    ("FontFile", "get_cache_count", 3905245787),
    ("FontFile", "clear_cache", 3218959716),
    ("FontFile", "remove_cache", 1286410250),
    ("Node", "set_name", 827249177),
    ("Node", "get_name", 2002593661),
    ("Node", "add_child", 3863233950),
    ("Node", "remove_child", 1078189570),
    ("Node", "get_child_count", 894402041),
    ("Node", "get_child", 541365242),
    ("Node", "get_parent", 3160264692),
    ("Node", "is_inside_tree", 36873697),
    ("Node", "queue_free", 3218959716),
    ("CanvasItem", "set_visible", 2586408642),
    ("CanvasItem", "is_visible", 36873698),
    ("CanvasItem", "show", 3218959717),
    ("CanvasItem", "hide", 3218959718),
    ("CanvasItem", "set_modulate", 2920490490),
    ("CanvasItem", "get_modulate", 3444240500),
    ("Node2D", "set_position", 743155724),
    ("Node2D", "get_position", 3341600327),
    ("Node2D", "set_rotation", 373806690),
    ("Node2D", "get_rotation", 1740695151),
    ("Node2D", "set_scale", 743155725),
    ("Node2D", "get_scale", 3341600328),
    ("Node2D", "translate", 743155726),
    ("Camera2D", "set_offset", 743155727),
    ("Camera2D", "get_offset", 3341600329),
    ("Camera2D", "set_zoom", 743155728),
    ("Camera2D", "get_zoom", 3341600330),
    ("Camera2D", "set_anchor_mode", 2302511274),
    ("Camera2D", "get_anchor_mode", 3362217310),
    ("Camera2D", "set_limit", 2324196778),
    ("Camera2D", "get_limit", 3979511119),
    ("Camera2D", "make_current", 3218959719),
    ("Camera2D", "is_current", 36873699),
    ("Camera2D", "set_enabled", 2586408643),
    ("Camera2D", "is_enabled", 36873700),
    ("Camera2D", "set_process_callback", 2302511275),
    ("Camera2D", "get_process_callback", 3362217311),
    ("CpuParticles2D", "set_emitting", 2586408644),
    ("CpuParticles2D", "is_emitting", 36873701),
    ("CpuParticles2D", "set_amount", 1286410251),
    ("CpuParticles2D", "get_amount", 3905245788),
    ("CpuParticles2D", "set_lifetime", 373806691),
    ("CpuParticles2D", "get_lifetime", 1740695152),
    ("CpuParticles2D", "set_one_shot", 2586408645),
    ("CpuParticles2D", "get_one_shot", 36873702),
    ("CpuParticles2D", "set_spread", 373806692),
    ("CpuParticles2D", "get_spread", 1740695153),
    ("CpuParticles2D", "set_direction", 743155729),
    ("CpuParticles2D", "get_direction", 3341600331),
    ("CpuParticles2D", "set_gravity", 743155730),
    ("CpuParticles2D", "get_gravity", 3341600332),
    ("CpuParticles2D", "set_param_min", 3320600299),
    ("CpuParticles2D", "get_param_min", 2038050600),
    ("CpuParticles2D", "set_param_max", 3320600300),
    ("CpuParticles2D", "get_param_max", 2038050601),
    ("CpuParticles2D", "set_particle_flag", 1774431677),
    ("CpuParticles2D", "get_particle_flag", 1100442926),
    ("CpuParticles2D", "set_draw_order", 2302511277),
    ("CpuParticles2D", "get_draw_order", 3362217313),
    ("CpuParticles2D", "set_emission_shape", 2302511276),
    ("CpuParticles2D", "get_emission_shape", 3362217312),
    ("CpuParticles2D", "restart", 3218959720),
    ("Control", "set_position", 4155559373),
    ("Control", "get_position", 3341600334),
    ("Control", "set_size", 4155559372),
    ("Control", "get_size", 3341600333),
    ("Control", "grab_focus", 3218959721),
    ("Control", "has_focus", 36873703),
    ("PopupMenu", "add_item", 3674230041),
    ("PopupMenu", "add_check_item", 3674230042),
    ("PopupMenu", "add_separator", 2266703459),
    ("PopupMenu", "set_item_text", 2285447959),
    ("PopupMenu", "get_item_text", 3929349210),
    ("PopupMenu", "set_item_checked", 3023605688),
    ("PopupMenu", "is_item_checked", 1100442928),
    ("PopupMenu", "set_item_count", 1286410255),
    ("PopupMenu", "get_item_count", 3905245791),
    ("PopupMenu", "remove_item", 1286410256),
    ("PopupMenu", "clear", 3218959723),
    ("PopupMenu", "get_item_id", 3744713108),
    ("PopupMenu", "get_item_index", 3744713109),
    ("Node3D", "set_position", 3460891852),
    ("Node3D", "get_position", 3360562783),
    ("Node3D", "set_scale", 3460891853),
    ("Node3D", "get_scale", 3360562784),
    ("PhysicsBody3D", "set_collision_layer", 1286410257),
    ("PhysicsBody3D", "get_collision_layer", 3905245792),
    ("PhysicsBody3D", "set_collision_mask", 1286410258),
    ("PhysicsBody3D", "get_collision_mask", 3905245793),
    ("PhysicsBody3D", "set_collision_layer_value", 3023605689),
    ("PhysicsBody3D", "get_collision_layer_value", 1100442929),
    ("RigidBody3D", "set_mass", 373806693),
    ("RigidBody3D", "get_mass", 1740695154),
    ("RigidBody3D", "set_gravity_scale", 373806694),
    ("RigidBody3D", "get_gravity_scale", 1740695155),
    ("RigidBody3D", "set_linear_velocity", 3460891854),
    ("RigidBody3D", "get_linear_velocity", 3360562785),
    ("RigidBody3D", "set_angular_velocity", 3460891855),
    ("RigidBody3D", "get_angular_velocity", 3360562786),
    ("RigidBody3D", "apply_central_impulse", 3460891856),
    ("RigidBody3D", "apply_impulse", 2754756483),
    ("RigidBody3D", "apply_force", 2754756484),
    ("RigidBody3D", "set_sleeping", 2586408646),
    ("RigidBody3D", "is_sleeping", 36873704),
    ("RigidBody3D", "set_contact_monitor", 2586408647),
    ("RigidBody3D", "is_contact_monitor_enabled", 36873705),
    ("RigidBody3D", "set_max_contacts_reported", 1286410259),
    ("RigidBody3D", "get_max_contacts_reported", 3905245794),
    ("RigidBody3D", "set_freeze_mode", 2302511279),
    ("RigidBody3D", "get_freeze_mode", 3362217315),
    ("RigidBody3D", "set_center_of_mass_mode", 2302511280),
    ("RigidBody3D", "get_center_of_mass_mode", 3362217316),
    ("RigidBody3D", "set_linear_damp_mode", 2302511281),
    ("RigidBody3D", "get_linear_damp_mode", 3362217317),
    ("RigidBody3D", "set_angular_damp_mode", 2302511282),
    ("RigidBody3D", "get_angular_damp_mode", 3362217318),
    ("Tree", "clear", 3218959722),
    ("Tree", "create_item", 528467046),
    ("Tree", "get_root", 1514277247),
    ("Tree", "set_columns", 1286410252),
    ("Tree", "get_columns", 3905245789),
    ("Tree", "set_column_title", 2285447957),
    ("Tree", "get_column_title", 3929349208),
    ("Tree", "get_selected", 1514277248),
    ("Tree", "get_selected_column", 3905245790),
    ("Tree", "set_select_mode", 2302511278),
    ("Tree", "get_select_mode", 3362217314),
    ("Tree", "get_item_area_rect", 47544404),
    ("TreeItem", "set_text", 2285447958),
    ("TreeItem", "get_text", 3929349209),
    ("TreeItem", "select", 1286410253),
    ("TreeItem", "deselect", 1286410254),
    ("TreeItem", "is_selected", 1100442927),
    ("TreeItem", "set_custom_bg_color", 894174025),
    ("TreeItem", "get_custom_bg_color", 3843376101),
    ("TreeItem", "create_child", 528467047),
    ("TreeItem", "get_parent", 1514277249),
    ("TreeItem", "get_next", 1514277250),
    ("TreeItem", "get_first_child", 1514277251),
];

/// Token handed out by `classdb_get_method_bind`; leaked, one per (class, method).
pub struct MethodBind {
    pub class: &'static str,
    pub method: &'static str,
}

fn bind_cache() -> &'static Mutex<HashMap<(&'static str, &'static str), usize>> {
    static CACHE: OnceLock<Mutex<HashMap<(&'static str, &'static str), usize>>> = OnceLock::new();
    CACHE.get_or_init(|| Mutex::new(HashMap::new()))
}

pub fn method_bind(class: &str, method: &str, hash: i64) -> *const c_void {
    let Some((class, method, _)) = METHODS
        .iter()
        .find(|(c, m, h)| *c == class && *m == method && *h == hash)
    else {
        return std::ptr::null();
    };

    let mut cache = bind_cache().lock().unwrap();
    let entry = cache.entry((class, method)).or_insert_with(|| {
        Box::into_raw(Box::new(MethodBind { class, method })) as usize
    });
    *entry as *const c_void
}

pub fn class_tag(class: &str) -> *const c_void {
    match class_entry(class) {
        Some(entry) => entry as *const _ as *const c_void,
        None => std::ptr::null(),
    }
}

fn class_of_tag(tag: *const c_void) -> Option<&'static str> {
    CLASSES
        .iter()
        .find(|entry| *entry as *const _ as *const c_void == tag)
        .map(|(class, _, _)| *class)
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Object registry

/// What the binding's object pointers actually point at. Leaked on purpose; see module docs.
#[repr(C)]
pub struct HostObject {
    pub id: u64,
}

#[derive(Clone, PartialEq, Debug)]
enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Vec2([f32; 2]),
    Vec3([f32; 3]),
    Quad([f32; 4]),
    Text(String),
}

struct Connection {
    signal: String,
    callable: usize,
    #[allow(dead_code)]
    flags: u32,
}

#[derive(Clone, Default)]
struct MenuItem {
    text: String,
    id: i32,
    checkable: bool,
    checked: bool,
    separator: bool,
    accel: i64,
}

struct ObjectState {
    class: &'static str,
    refcount: Option<u32>,
    props: HashMap<String, Value>,
    name: String,
    parent: Option<u64>,
    children: Vec<u64>,
    connections: Vec<Connection>,
    items: Vec<MenuItem>,
    // Tree
    tree_root: Option<u64>,
    tree_selected: Option<(u64, i32)>,
    // TreeItem
    item_tree: Option<u64>,
    item_parent: Option<u64>,
    item_children: Vec<u64>,
}

impl ObjectState {
    fn new(class: &'static str) -> Self {
        Self {
            class,
            refcount: is_refcounted(class).then_some(0),
            props: HashMap::new(),
            name: String::new(),
            parent: None,
            children: Vec::new(),
            connections: Vec::new(),
            items: Vec::new(),
            tree_root: None,
            tree_selected: None,
            item_tree: None,
            item_parent: None,
            item_children: Vec::new(),
        }
    }

    fn flag(&self, key: &str, default: bool) -> bool {
        match self.props.get(key) {
            Some(Value::Bool(b)) => *b,
            _ => default,
        }
    }

    fn int(&self, key: &str, default: i64) -> i64 {
        match self.props.get(key) {
            Some(Value::Int(i)) => *i,
            _ => default,
        }
    }

    fn float(&self, key: &str, default: f64) -> f64 {
        match self.props.get(key) {
            Some(Value::Float(f)) => *f,
            _ => default,
        }
    }

    fn vec2(&self, key: &str, default: [f32; 2]) -> [f32; 2] {
        match self.props.get(key) {
            Some(Value::Vec2(v)) => *v,
            _ => default,
        }
    }

    fn vec3(&self, key: &str, default: [f32; 3]) -> [f32; 3] {
        match self.props.get(key) {
            Some(Value::Vec3(v)) => *v,
            _ => default,
        }
    }

    fn quad(&self, key: &str, default: [f32; 4]) -> [f32; 4] {
        match self.props.get(key) {
            Some(Value::Quad(v)) => *v,
            _ => default,
        }
    }

    fn text(&self, key: &str, default: &str) -> String {
        match self.props.get(key) {
            Some(Value::Text(s)) => s.clone(),
            _ => default.to_string(),
        }
    }

    fn put(&mut self, key: &str, value: Value) {
        self.props.insert(key.to_string(), value);
    }
}

#[derive(Default)]
struct Engine {
    next_id: u64,
    objects: HashMap<u64, ObjectState>,
    // Instance id -> HostObject pointer (as usize, to stay Send).
    ptrs: HashMap<u64, usize>,
    focused_control: Option<u64>,
    current_camera: Option<u64>,
}

fn engine() -> &'static Mutex<Engine> {
    static ENGINE: OnceLock<Mutex<Engine>> = OnceLock::new();
    ENGINE.get_or_init(|| {
        Mutex::new(Engine {
            next_id: 1,
            ..Engine::default()
        })
    })
}

fn error(message: &str) {
    eprintln!("MOCK ENGINE ERROR: {message}");
}

fn spawn_locked(e: &mut Engine, class: &'static str) -> (u64, usize) {
    let mut id = e.next_id;
    e.next_id += 1;
    // The engine encodes memory management in the id: bit 63 marks refcounted objects.
    if is_refcounted(class) {
        id |= 1 << 63;
    }
    let ptr = Box::into_raw(Box::new(HostObject { id })) as usize;
    e.objects.insert(id, ObjectState::new(class));
    e.ptrs.insert(id, ptr);
    (id, ptr)
}

pub fn construct_object(class_name: &str) -> *mut c_void {
    let Some((class, _, _)) = class_entry(class_name) else {
        error(&format!("cannot construct unknown class '{class_name}'"));
        return std::ptr::null_mut();
    };
    let mut e = engine().lock().unwrap();
    let (_, ptr) = spawn_locked(&mut e, class);
    ptr as *mut c_void
}

/// Removes the object from the registry and detaches it from parent/child links. Returns the
/// callables of its connections; the caller must release them after dropping the engine lock.
fn destroy_locked(e: &mut Engine, id: u64) -> Vec<usize> {
    let Some(state) = e.objects.remove(&id) else {
        return Vec::new();
    };
    e.ptrs.remove(&id);
    if let Some(parent) = state.parent {
        if let Some(parent_state) = e.objects.get_mut(&parent) {
            parent_state.children.retain(|child| *child != id);
        }
    }
    for child in &state.children {
        if let Some(child_state) = e.objects.get_mut(child) {
            child_state.parent = None;
        }
    }
    state.connections.into_iter().map(|c| c.callable).collect()
}

pub fn destroy_object(instance: *mut c_void) {
    let id = unsafe { (*(instance as *const HostObject)).id };
    let released = {
        let mut e = engine().lock().unwrap();
        destroy_locked(&mut e, id)
    };
    release_callables(&released);
}

fn release_callables(callables: &[usize]) {
    for c in callables {
        unsafe { values::callable_dec(*c as *mut HostCallable) };
    }
}

pub fn instance_id(instance: *const c_void) -> u64 {
    unsafe { (*(instance as *const HostObject)).id }
}

pub fn instance_from_id(id: u64) -> *mut c_void {
    let e = engine().lock().unwrap();
    match e.ptrs.get(&id) {
        Some(ptr) => *ptr as *mut c_void,
        None => std::ptr::null_mut(),
    }
}

pub fn cast_to(instance: *const c_void, tag: *const c_void) -> *mut c_void {
    let id = instance_id(instance);
    let Some(target) = class_of_tag(tag) else {
        return std::ptr::null_mut();
    };
    let e = engine().lock().unwrap();
    match e.objects.get(&id) {
        Some(state) if inherits(state.class, target) => instance as *mut c_void,
        _ => std::ptr::null_mut(),
    }
}

/// Increments the refcount of a refcounted object on behalf of a variant that now references it.
pub fn variant_ref_object(id: u64) {
    let mut e = engine().lock().unwrap();
    if let Some(state) = e.objects.get_mut(&id) {
        if let Some(rc) = state.refcount.as_mut() {
            *rc += 1;
        }
    }
}

/// Releases a variant-held object reference; frees the object when the count hits zero.
pub fn variant_unref_object(id: u64) {
    let released = {
        let mut e = engine().lock().unwrap();
        let Some(state) = e.objects.get_mut(&id) else {
            return;
        };
        let Some(rc) = state.refcount.as_mut() else {
            return;
        };
        *rc -= 1;
        if *rc == 0 {
            destroy_locked(&mut e, id)
        } else {
            Vec::new()
        }
    };
    release_callables(&released);
}

/// Releases whatever an owned variant payload references. Never call under the engine lock.
pub unsafe fn release_variant(value: VariantValue) {
    match value {
        VariantValue::String(s) => drop(Box::from_raw(s)),
        VariantValue::Callable(c) => values::callable_dec(c),
        VariantValue::Object { id, .. } => variant_unref_object(id),
        _ => {}
    }
}

/// Deep-copies a variant, taking new references on shared payloads.
pub unsafe fn copy_variant(value: &VariantValue) -> VariantValue {
    match value {
        VariantValue::String(s) => VariantValue::String(Box::into_raw(Box::new((**s).clone()))),
        VariantValue::Callable(c) => {
            values::callable_inc(*c);
            VariantValue::Callable(*c)
        }
        VariantValue::Object { ptr, id } => {
            variant_ref_object(*id);
            VariantValue::Object { ptr: *ptr, id: *id }
        }
        other => other.clone(),
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Ptrcall argument/return plumbing
//
// Wire formats mirror the binding's `ArborFfi` impls: integers widen to i64, f32 widens to f64,
// math types pass by value, strings/names/callables pass a pointer to their opaque slot, and
// objects pass a pointer to the object-pointer slot. Return slots are uninitialized.

unsafe fn slot(args: *const sys::AxiConstTypePtr, i: usize) -> *const c_void {
    *args.add(i)
}

unsafe fn arg_i64(args: *const sys::AxiConstTypePtr, i: usize) -> i64 {
    *(slot(args, i) as *const i64)
}

unsafe fn arg_i32(args: *const sys::AxiConstTypePtr, i: usize) -> i32 {
    arg_i64(args, i) as i32
}

unsafe fn arg_u32(args: *const sys::AxiConstTypePtr, i: usize) -> u32 {
    arg_i64(args, i) as u32
}

unsafe fn arg_f64(args: *const sys::AxiConstTypePtr, i: usize) -> f64 {
    *(slot(args, i) as *const f64)
}

unsafe fn arg_f32(args: *const sys::AxiConstTypePtr, i: usize) -> f32 {
    arg_f64(args, i) as f32
}

unsafe fn arg_bool(args: *const sys::AxiConstTypePtr, i: usize) -> bool {
    *(slot(args, i) as *const bool)
}

unsafe fn arg_v2(args: *const sys::AxiConstTypePtr, i: usize) -> [f32; 2] {
    *(slot(args, i) as *const [f32; 2])
}

unsafe fn arg_v3(args: *const sys::AxiConstTypePtr, i: usize) -> [f32; 3] {
    *(slot(args, i) as *const [f32; 3])
}

unsafe fn arg_quad(args: *const sys::AxiConstTypePtr, i: usize) -> [f32; 4] {
    *(slot(args, i) as *const [f32; 4])
}

unsafe fn arg_str(args: *const sys::AxiConstTypePtr, i: usize) -> String {
    values::read_string(slot(args, i))
}

unsafe fn arg_name(args: *const sys::AxiConstTypePtr, i: usize) -> &'static String {
    values::read_name(slot(args, i))
}

unsafe fn arg_callable(args: *const sys::AxiConstTypePtr, i: usize) -> *mut HostCallable {
    values::callable_slot(slot(args, i))
}

/// Object argument: the slot holds a pointer to the object pointer.
unsafe fn arg_object(args: *const sys::AxiConstTypePtr, i: usize) -> Option<u64> {
    let object_ptr = *(slot(args, i) as *const *const c_void);
    if object_ptr.is_null() {
        None
    } else {
        Some(instance_id(object_ptr))
    }
}

unsafe fn ret_i64(ret: sys::AxiTypePtr, v: i64) {
    *(ret as *mut i64) = v;
}

unsafe fn ret_f64(ret: sys::AxiTypePtr, v: f64) {
    *(ret as *mut f64) = v;
}

unsafe fn ret_f32(ret: sys::AxiTypePtr, v: f32) {
    ret_f64(ret, v as f64);
}

unsafe fn ret_bool(ret: sys::AxiTypePtr, v: bool) {
    *(ret as *mut bool) = v;
}

unsafe fn ret_v2(ret: sys::AxiTypePtr, v: [f32; 2]) {
    *(ret as *mut [f32; 2]) = v;
}

unsafe fn ret_v3(ret: sys::AxiTypePtr, v: [f32; 3]) {
    *(ret as *mut [f32; 3]) = v;
}

unsafe fn ret_quad(ret: sys::AxiTypePtr, v: [f32; 4]) {
    *(ret as *mut [f32; 4]) = v;
}

unsafe fn ret_str(ret: sys::AxiTypePtr, v: String) {
    values::write_string(ret, v);
}

unsafe fn ret_name(ret: sys::AxiTypePtr, v: &str) {
    values::write_name(ret, values::intern(v));
}

unsafe fn ret_object(ret: sys::AxiTypePtr, ptr: Option<usize>) {
    *(ret as *mut *mut c_void) = match ptr {
        Some(p) => p as *mut c_void,
        None => std::ptr::null_mut(),
    };
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Dispatch helpers

fn v3_add(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

fn v3_scale(a: [f32; 3], s: f32) -> [f32; 3] {
    [a[0] * s, a[1] * s, a[2] * s]
}

fn v3_cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn file_stem(path: &str) -> String {
    let file = path.rsplit('/').next().unwrap_or(path);
    file.split('.').next().unwrap_or("").to_string()
}

/// Default camera limits, one per side ordinal (left, top, right, bottom).
const CAMERA_LIMIT_DEFAULTS: [i64; 4] = [-10_000_000, -10_000_000, 10_000_000, 10_000_000];

fn item_ptr(e: &Engine, id: u64) -> Option<usize> {
    e.ptrs.get(&id).copied()
}

/// Creates a `TreeItem` under `parent` (or as tree root when `parent` is `None`), at `index`
/// (-1 appends). Returns the new item's object pointer.
fn create_tree_item(e: &mut Engine, tree_id: u64, parent: Option<u64>, index: i32) -> usize {
    let parent = parent.or_else(|| {
        let tree = e.objects.get(&tree_id)?;
        tree.tree_root
    });

    let (item_id, ptr) = spawn_locked(e, "TreeItem");

    let order = {
        let tree = e.objects.get_mut(&tree_id).expect("tree state");
        let order = tree.int("item_counter", 0);
        tree.put("item_counter", Value::Int(order + 1));
        order
    };

    {
        let item = e.objects.get_mut(&item_id).expect("item state");
        item.item_tree = Some(tree_id);
        item.item_parent = parent;
        item.put("order", Value::Int(order));
    }

    match parent {
        Some(parent_id) => {
            let parent_state = e.objects.get_mut(&parent_id).expect("parent item state");
            let len = parent_state.item_children.len();
            let at = if index < 0 { len } else { (index as usize).min(len) };
            parent_state.item_children.insert(at, item_id);
        }
        None => {
            let tree = e.objects.get_mut(&tree_id).expect("tree state");
            tree.tree_root = Some(item_id);
        }
    }

    ptr
}

/// Collects an item subtree in depth-first order.
fn collect_items(e: &Engine, root: u64, out: &mut Vec<u64>) {
    out.push(root);
    if let Some(state) = e.objects.get(&root) {
        for child in &state.item_children {
            collect_items(e, *child, out);
        }
    }
}

/// Invokes a callable with borrowed variant arguments and discards its return value.
unsafe fn invoke_callable(
    callable: *mut HostCallable,
    args: &[sys::AxiConstVariantPtr],
) {
    let mut ret = std::mem::MaybeUninit::<[u8; 24]>::uninit();
    let ret_ptr = ret.as_mut_ptr() as *mut c_void;
    values::write_variant(ret_ptr, VariantValue::Nil);

    let mut err = sys::AxiCallError {
        error: sys::AXI_CALL_OK,
        argument: 0,
        expected: 0,
    };

    let info = &(*callable).info;
    if let Some(call_func) = info.call_func {
        call_func(
            info.callable_userdata,
            if args.is_empty() {
                std::ptr::null()
            } else {
                args.as_ptr()
            },
            args.len() as i64,
            ret_ptr,
            &mut err,
        );
    }

    release_variant(values::take_variant(ret_ptr));
}

/// Engine-initiated, parameterless signal emission (e.g. `Tree.item_selected` after `select`).
fn fire_signal(target: u64, signal: &str) {
    let callables: Vec<usize> = {
        let e = engine().lock().unwrap();
        let Some(state) = e.objects.get(&target) else {
            return;
        };
        state
            .connections
            .iter()
            .filter(|c| c.signal == signal)
            .map(|c| {
                unsafe { values::callable_inc(c.callable as *mut HostCallable) };
                c.callable
            })
            .collect()
    };

    for c in &callables {
        unsafe { invoke_callable(*c as *mut HostCallable, &[]) };
    }
    release_callables(&callables);
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Ptrcall dispatch

macro_rules! state {
    ($e:expr, $id:expr) => {
        $e.objects.get_mut(&$id).expect("method call on freed object")
    };
}

pub unsafe fn ptrcall(
    bind: &MethodBind,
    instance: *mut c_void,
    args: *const sys::AxiConstTypePtr,
    ret: sys::AxiTypePtr,
) {
    let id = instance_id(instance);

    // Signals to deliver and callables to release once the lock is gone.
    let mut pending: Vec<(u64, &'static str)> = Vec::new();
    let mut released: Vec<usize> = Vec::new();

    {
        let mut e = engine().lock().unwrap();
        let e = &mut *e;
        if !e.objects.contains_key(&id) {
            error(&format!(
                "call to {}::{} on freed instance #{id}",
                bind.class, bind.method
            ));
            return;
        }

        match (bind.class, bind.method) {
            // --- Object ---------------------------------------------------------------------
            ("Object", "connect") => {
                let signal = arg_name(args, 0);
                let callable = arg_callable(args, 1);
                let flags = arg_u32(args, 2);
                let st = state!(e, id);

                let code = if signal_params(st.class, signal).is_none() {
                    error(&format!("connect: no signal '{signal}' in {}", st.class));
                    12 // ERR_INVALID_PARAMETER
                } else if st
                    .connections
                    .iter()
                    .any(|c| c.signal == *signal && c.callable == callable as usize)
                {
                    error(&format!("connect: '{signal}' already connected"));
                    12
                } else {
                    values::callable_inc(callable);
                    st.connections.push(Connection {
                        signal: signal.clone(),
                        callable: callable as usize,
                        flags,
                    });
                    0 // OK
                };
                ret_i64(ret, code);
            }
            ("Object", "disconnect") => {
                let signal = arg_name(args, 0);
                let callable = arg_callable(args, 1) as usize;
                let st = state!(e, id);
                let before = st.connections.len();
                st.connections
                    .retain(|c| !(c.signal == *signal && c.callable == callable));
                if st.connections.len() == before {
                    error(&format!("disconnect: '{signal}' was not connected"));
                } else {
                    released.push(callable);
                }
            }
            ("Object", "is_connected") => {
                let signal = arg_name(args, 0);
                let callable = arg_callable(args, 1) as usize;
                let st = state!(e, id);
                let connected = st
                    .connections
                    .iter()
                    .any(|c| c.signal == *signal && c.callable == callable);
                ret_bool(ret, connected);
            }
            ("Object", "get_class") => {
                let class = state!(e, id).class;
                ret_str(ret, class.to_string());
            }

            // --- RefCounted -----------------------------------------------------------------
            ("RefCounted", "init_ref") => {
                let st = state!(e, id);
                let rc = st.refcount.as_mut().expect("refcount on non-RefCounted");
                *rc = if *rc == 0 { 1 } else { *rc + 1 };
                ret_bool(ret, true);
            }
            ("RefCounted", "reference") => {
                let st = state!(e, id);
                *st.refcount.as_mut().expect("refcount on non-RefCounted") += 1;
                ret_bool(ret, true);
            }
            ("RefCounted", "unreference") => {
                let st = state!(e, id);
                let rc = st.refcount.as_mut().expect("refcount on non-RefCounted");
                *rc -= 1;
                ret_bool(ret, *rc == 0);
            }
            ("RefCounted", "get_reference_count") => {
                let rc = state!(e, id).refcount.expect("refcount on non-RefCounted");
                ret_i64(ret, rc as i64);
            }

            // --- Resource -------------------------------------------------------------------
            ("Resource", "set_name") => {
                let name = arg_str(args, 0);
                state!(e, id).put("resource_name", Value::Text(name));
            }
            ("Resource", "get_name") => {
                ret_str(ret, state!(e, id).text("resource_name", ""));
            }
            ("Resource", "emit_changed") => {
                pending.push((id, "changed"));
            }

            // --- Font / FontFile ------------------------------------------------------------
            ("Font", "get_font_name") => {
                ret_str(ret, state!(e, id).text("font_name", ""));
            }
            ("Font", "get_height") => {
                let size = arg_i64(args, 0);
                ret_f32(ret, size as f32 * 1.25);
            }
            ("FontFile", "set_font_name") => {
                let name = arg_str(args, 0);
                state!(e, id).put("font_name", Value::Text(name));
            }
            ("FontFile", "load_bitmap_font") | ("FontFile", "load_dynamic_font") => {
                let path = arg_str(args, 0);
                if path.is_empty() {
                    ret_i64(ret, 7); // ERR_FILE_NOT_FOUND
                } else {
                    let st = state!(e, id);
                    st.put("font_name", Value::Text(file_stem(&path)));
                    st.put("cache_count", Value::Int(1));
                    if bind.method == "load_bitmap_font" {
                        st.put("fixed_size", Value::Int(16));
                    }
                    ret_i64(ret, 0);
                }
            }
            ("FontFile", "set_antialiasing") => {
                let aa = arg_i64(args, 0);
                state!(e, id).put("antialiasing", Value::Int(aa));
            }
            ("FontFile", "get_antialiasing") => {
                ret_i64(ret, state!(e, id).int("antialiasing", 1));
            }
            ("FontFile", "set_fixed_size") => {
                let size = arg_i64(args, 0);
                state!(e, id).put("fixed_size", Value::Int(size));
            }
            ("FontFile", "get_fixed_size") => {
                ret_i64(ret, state!(e, id).int("fixed_size", 0));
            }
            ("FontFile", "set_oversampling") => {
                let v = arg_f64(args, 0);
                state!(e, id).put("oversampling", Value::Float(v));
            }
            ("FontFile", "get_oversampling") => {
                ret_f32(ret, state!(e, id).float("oversampling", 0.0) as f32);
            }
            ("FontFile", "get_cache_count") => {
                ret_i64(ret, state!(e, id).int("cache_count", 0));
            }
            ("FontFile", "clear_cache") => {
                state!(e, id).put("cache_count", Value::Int(0));
            }
            ("FontFile", "remove_cache") => {
                let st = state!(e, id);
                let count = st.int("cache_count", 0);
                if count > 0 {
                    st.put("cache_count", Value::Int(count - 1));
                }
            }

            // --- Node -----------------------------------------------------------------------
            ("Node", "set_name") => {
                state!(e, id).name = arg_str(args, 0);
            }
            ("Node", "get_name") => {
                let name = state!(e, id).name.clone();
                ret_name(ret, &name);
            }
            ("Node", "add_child") => {
                let Some(child) = arg_object(args, 0) else {
                    error("add_child: null child");
                    return;
                };
                let child_state = state!(e, child);
                if child_state.parent.is_some() {
                    error("add_child: node already has a parent");
                } else {
                    child_state.parent = Some(id);
                    state!(e, id).children.push(child);
                }
            }
            ("Node", "remove_child") => {
                if let Some(child) = arg_object(args, 0) {
                    state!(e, id).children.retain(|c| *c != child);
                    state!(e, child).parent = None;
                }
            }
            ("Node", "get_child_count") => {
                ret_i64(ret, state!(e, id).children.len() as i64);
            }
            ("Node", "get_child") => {
                let mut idx = arg_i64(args, 0);
                let children = state!(e, id).children.clone();
                if idx < 0 {
                    idx += children.len() as i64;
                }
                let ptr = children
                    .get(idx.max(0) as usize)
                    .and_then(|child| item_ptr(e, *child));
                if ptr.is_none() {
                    error(&format!("get_child: index {idx} out of bounds"));
                }
                ret_object(ret, ptr);
            }
            ("Node", "get_parent") => {
                let parent = state!(e, id).parent;
                ret_object(ret, parent.and_then(|p| item_ptr(e, p)));
            }
            ("Node", "is_inside_tree") => {
                ret_bool(ret, state!(e, id).parent.is_some());
            }
            ("Node", "queue_free") => {
                state!(e, id).put("queued_free", Value::Bool(true));
            }

            // --- CanvasItem -----------------------------------------------------------------
            ("CanvasItem", "set_visible") | ("CanvasItem", "show") | ("CanvasItem", "hide") => {
                let visible = match bind.method {
                    "show" => true,
                    "hide" => false,
                    _ => arg_bool(args, 0),
                };
                let st = state!(e, id);
                if st.flag("visible", true) != visible {
                    st.put("visible", Value::Bool(visible));
                    pending.push((id, "visibility_changed"));
                }
            }
            ("CanvasItem", "is_visible") => {
                ret_bool(ret, state!(e, id).flag("visible", true));
            }
            ("CanvasItem", "set_modulate") => {
                let color = arg_quad(args, 0);
                state!(e, id).put("modulate", Value::Quad(color));
            }
            ("CanvasItem", "get_modulate") => {
                ret_quad(ret, state!(e, id).quad("modulate", [1.0, 1.0, 1.0, 1.0]));
            }

            // --- Node2D ---------------------------------------------------------------------
            ("Node2D", "set_position") => {
                let pos = arg_v2(args, 0);
                state!(e, id).put("position", Value::Vec2(pos));
            }
            ("Node2D", "get_position") => {
                ret_v2(ret, state!(e, id).vec2("position", [0.0, 0.0]));
            }
            ("Node2D", "set_rotation") => {
                let rot = arg_f64(args, 0);
                state!(e, id).put("rotation", Value::Float(rot));
            }
            ("Node2D", "get_rotation") => {
                ret_f32(ret, state!(e, id).float("rotation", 0.0) as f32);
            }
            ("Node2D", "set_scale") => {
                let scale = arg_v2(args, 0);
                state!(e, id).put("scale", Value::Vec2(scale));
            }
            ("Node2D", "get_scale") => {
                ret_v2(ret, state!(e, id).vec2("scale", [1.0, 1.0]));
            }
            ("Node2D", "translate") => {
                let offset = arg_v2(args, 0);
                let st = state!(e, id);
                let pos = st.vec2("position", [0.0, 0.0]);
                st.put("position", Value::Vec2([pos[0] + offset[0], pos[1] + offset[1]]));
            }

            // --- Camera2D -------------------------------------------------------------------
            ("Camera2D", "set_offset") => {
                let v = arg_v2(args, 0);
                state!(e, id).put("offset", Value::Vec2(v));
            }
            ("Camera2D", "get_offset") => {
                ret_v2(ret, state!(e, id).vec2("offset", [0.0, 0.0]));
            }
            ("Camera2D", "set_zoom") => {
                let v = arg_v2(args, 0);
                state!(e, id).put("zoom", Value::Vec2(v));
            }
            ("Camera2D", "get_zoom") => {
                ret_v2(ret, state!(e, id).vec2("zoom", [1.0, 1.0]));
            }
            ("Camera2D", "set_anchor_mode") => {
                let mode = arg_i64(args, 0);
                state!(e, id).put("anchor_mode", Value::Int(mode));
            }
            ("Camera2D", "get_anchor_mode") => {
                ret_i64(ret, state!(e, id).int("anchor_mode", 1));
            }
            ("Camera2D", "set_limit") => {
                let side = arg_i64(args, 0);
                let value = arg_i64(args, 1);
                state!(e, id).put(&format!("limit_{side}"), Value::Int(value));
            }
            ("Camera2D", "get_limit") => {
                let side = arg_i64(args, 0);
                let default = CAMERA_LIMIT_DEFAULTS
                    .get(side.max(0) as usize)
                    .copied()
                    .unwrap_or(0);
                ret_i64(ret, state!(e, id).int(&format!("limit_{side}"), default));
            }
            ("Camera2D", "make_current") => {
                e.current_camera = Some(id);
            }
            ("Camera2D", "is_current") => {
                ret_bool(ret, e.current_camera == Some(id));
            }
            ("Camera2D", "set_enabled") => {
                let enabled = arg_bool(args, 0);
                state!(e, id).put("enabled", Value::Bool(enabled));
                if !enabled && e.current_camera == Some(id) {
                    e.current_camera = None;
                }
            }
            ("Camera2D", "is_enabled") => {
                ret_bool(ret, state!(e, id).flag("enabled", true));
            }
            ("Camera2D", "set_process_callback") => {
                let cb = arg_i64(args, 0);
                state!(e, id).put("process_callback", Value::Int(cb));
            }
            ("Camera2D", "get_process_callback") => {
                ret_i64(ret, state!(e, id).int("process_callback", 1));
            }

            // --- CpuParticles2D -------------------------------------------------------------
            ("CpuParticles2D", "set_emitting") => {
                let v = arg_bool(args, 0);
                state!(e, id).put("emitting", Value::Bool(v));
            }
            ("CpuParticles2D", "is_emitting") => {
                ret_bool(ret, state!(e, id).flag("emitting", true));
            }
            ("CpuParticles2D", "set_amount") => {
                let amount = arg_i64(args, 0);
                if amount < 1 {
                    error("set_amount: amount must be at least 1");
                } else {
                    state!(e, id).put("amount", Value::Int(amount));
                }
            }
            ("CpuParticles2D", "get_amount") => {
                ret_i64(ret, state!(e, id).int("amount", 8));
            }
            ("CpuParticles2D", "set_lifetime") => {
                let lifetime = arg_f64(args, 0);
                if lifetime <= 0.0 {
                    error("set_lifetime: lifetime must be positive");
                } else {
                    state!(e, id).put("lifetime", Value::Float(lifetime));
                }
            }
            ("CpuParticles2D", "get_lifetime") => {
                ret_f64(ret, state!(e, id).float("lifetime", 1.0));
            }
            ("CpuParticles2D", "set_one_shot") => {
                let v = arg_bool(args, 0);
                state!(e, id).put("one_shot", Value::Bool(v));
            }
            ("CpuParticles2D", "get_one_shot") => {
                ret_bool(ret, state!(e, id).flag("one_shot", false));
            }
            ("CpuParticles2D", "set_spread") => {
                let v = arg_f64(args, 0);
                state!(e, id).put("spread", Value::Float(v));
            }
            ("CpuParticles2D", "get_spread") => {
                ret_f32(ret, state!(e, id).float("spread", 45.0) as f32);
            }
            ("CpuParticles2D", "set_direction") => {
                let v = arg_v2(args, 0);
                state!(e, id).put("direction", Value::Vec2(v));
            }
            ("CpuParticles2D", "get_direction") => {
                ret_v2(ret, state!(e, id).vec2("direction", [1.0, 0.0]));
            }
            ("CpuParticles2D", "set_gravity") => {
                let v = arg_v2(args, 0);
                state!(e, id).put("gravity", Value::Vec2(v));
            }
            ("CpuParticles2D", "get_gravity") => {
                ret_v2(ret, state!(e, id).vec2("gravity", [0.0, 980.0]));
            }
            ("CpuParticles2D", "set_param_min") => {
                let param = arg_i64(args, 0);
                let v = arg_f64(args, 1);
                state!(e, id).put(&format!("param_min_{param}"), Value::Float(v));
            }
            ("CpuParticles2D", "get_param_min") => {
                let param = arg_i64(args, 0);
                ret_f32(ret, state!(e, id).float(&format!("param_min_{param}"), 0.0) as f32);
            }
            ("CpuParticles2D", "set_param_max") => {
                let param = arg_i64(args, 0);
                let v = arg_f64(args, 1);
                state!(e, id).put(&format!("param_max_{param}"), Value::Float(v));
            }
            ("CpuParticles2D", "get_param_max") => {
                let param = arg_i64(args, 0);
                ret_f32(ret, state!(e, id).float(&format!("param_max_{param}"), 0.0) as f32);
            }
            ("CpuParticles2D", "set_particle_flag") => {
                let flag = arg_i64(args, 0);
                let v = arg_bool(args, 1);
                state!(e, id).put(&format!("particle_flag_{flag}"), Value::Bool(v));
            }
            ("CpuParticles2D", "get_particle_flag") => {
                let flag = arg_i64(args, 0);
                ret_bool(ret, state!(e, id).flag(&format!("particle_flag_{flag}"), false));
            }
            ("CpuParticles2D", "set_draw_order") => {
                let v = arg_i64(args, 0);
                state!(e, id).put("draw_order", Value::Int(v));
            }
            ("CpuParticles2D", "get_draw_order") => {
                ret_i64(ret, state!(e, id).int("draw_order", 0));
            }
            ("CpuParticles2D", "set_emission_shape") => {
                let v = arg_i64(args, 0);
                state!(e, id).put("emission_shape", Value::Int(v));
            }
            ("CpuParticles2D", "get_emission_shape") => {
                ret_i64(ret, state!(e, id).int("emission_shape", 0));
            }
            ("CpuParticles2D", "restart") => {
                state!(e, id).put("emitting", Value::Bool(true));
            }

            // --- Control --------------------------------------------------------------------
            ("Control", "set_position") => {
                let pos = arg_v2(args, 0);
                state!(e, id).put("position", Value::Vec2(pos));
            }
            ("Control", "get_position") => {
                ret_v2(ret, state!(e, id).vec2("position", [0.0, 0.0]));
            }
            ("Control", "set_size") => {
                let size = arg_v2(args, 0);
                let st = state!(e, id);
                if st.vec2("size", [0.0, 0.0]) != size {
                    st.put("size", Value::Vec2(size));
                    pending.push((id, "resized"));
                }
            }
            ("Control", "get_size") => {
                ret_v2(ret, state!(e, id).vec2("size", [0.0, 0.0]));
            }
            ("Control", "grab_focus") => {
                if e.focused_control != Some(id) {
                    e.focused_control = Some(id);
                    pending.push((id, "focus_entered"));
                }
            }
            ("Control", "has_focus") => {
                ret_bool(ret, e.focused_control == Some(id));
            }

            // --- PopupMenu ------------------------------------------------------------------
            ("PopupMenu", "add_item") | ("PopupMenu", "add_check_item") => {
                let text = arg_str(args, 0);
                let mut item_id = arg_i32(args, 1);
                let accel = arg_i64(args, 2);
                let st = state!(e, id);
                if item_id < 0 {
                    item_id = st.items.len() as i32;
                }
                st.items.push(MenuItem {
                    text,
                    id: item_id,
                    checkable: bind.method == "add_check_item",
                    checked: false,
                    separator: false,
                    accel,
                });
            }
            ("PopupMenu", "add_separator") => {
                let text = arg_str(args, 0);
                let mut item_id = arg_i32(args, 1);
                let st = state!(e, id);
                if item_id < 0 {
                    item_id = st.items.len() as i32;
                }
                st.items.push(MenuItem {
                    text,
                    id: item_id,
                    separator: true,
                    ..MenuItem::default()
                });
            }
            ("PopupMenu", "set_item_text") => {
                let index = arg_i32(args, 0) as usize;
                let text = arg_str(args, 1);
                let st = state!(e, id);
                match st.items.get_mut(index) {
                    Some(item) => item.text = text,
                    None => error(&format!("set_item_text: index {index} out of bounds")),
                }
            }
            ("PopupMenu", "get_item_text") => {
                let index = arg_i32(args, 0) as usize;
                let st = state!(e, id);
                let text = match st.items.get(index) {
                    Some(item) => item.text.clone(),
                    None => {
                        error(&format!("get_item_text: index {index} out of bounds"));
                        String::new()
                    }
                };
                ret_str(ret, text);
            }
            ("PopupMenu", "set_item_checked") => {
                let index = arg_i32(args, 0) as usize;
                let checked = arg_bool(args, 1);
                let st = state!(e, id);
                match st.items.get_mut(index) {
                    Some(item) => item.checked = checked,
                    None => error(&format!("set_item_checked: index {index} out of bounds")),
                }
            }
            ("PopupMenu", "is_item_checked") => {
                let index = arg_i32(args, 0) as usize;
                let st = state!(e, id);
                ret_bool(ret, st.items.get(index).is_some_and(|item| item.checked));
            }
            ("PopupMenu", "set_item_count") => {
                let count = arg_i32(args, 0).max(0) as usize;
                let st = state!(e, id);
                while st.items.len() < count {
                    let item_id = st.items.len() as i32;
                    st.items.push(MenuItem {
                        id: item_id,
                        ..MenuItem::default()
                    });
                }
                st.items.truncate(count);
            }
            ("PopupMenu", "get_item_count") => {
                ret_i64(ret, state!(e, id).items.len() as i64);
            }
            ("PopupMenu", "remove_item") => {
                let index = arg_i32(args, 0) as usize;
                let st = state!(e, id);
                if index < st.items.len() {
                    st.items.remove(index);
                } else {
                    error(&format!("remove_item: index {index} out of bounds"));
                }
            }
            ("PopupMenu", "clear") => {
                state!(e, id).items.clear();
            }
            ("PopupMenu", "get_item_id") => {
                let index = arg_i32(args, 0) as usize;
                let st = state!(e, id);
                ret_i64(ret, st.items.get(index).map_or(0, |item| item.id) as i64);
            }
            ("PopupMenu", "get_item_index") => {
                let item_id = arg_i32(args, 0);
                let st = state!(e, id);
                let index = st
                    .items
                    .iter()
                    .position(|item| item.id == item_id)
                    .map_or(-1, |i| i as i64);
                ret_i64(ret, index);
            }

            // --- Node3D ---------------------------------------------------------------------
            ("Node3D", "set_position") => {
                let v = arg_v3(args, 0);
                state!(e, id).put("position_3d", Value::Vec3(v));
            }
            ("Node3D", "get_position") => {
                ret_v3(ret, state!(e, id).vec3("position_3d", [0.0, 0.0, 0.0]));
            }
            ("Node3D", "set_scale") => {
                let v = arg_v3(args, 0);
                state!(e, id).put("scale_3d", Value::Vec3(v));
            }
            ("Node3D", "get_scale") => {
                ret_v3(ret, state!(e, id).vec3("scale_3d", [1.0, 1.0, 1.0]));
            }

            // --- PhysicsBody3D --------------------------------------------------------------
            ("PhysicsBody3D", "set_collision_layer") => {
                let v = arg_i64(args, 0);
                state!(e, id).put("collision_layer", Value::Int(v));
            }
            ("PhysicsBody3D", "get_collision_layer") => {
                ret_i64(ret, state!(e, id).int("collision_layer", 1));
            }
            ("PhysicsBody3D", "set_collision_mask") => {
                let v = arg_i64(args, 0);
                state!(e, id).put("collision_mask", Value::Int(v));
            }
            ("PhysicsBody3D", "get_collision_mask") => {
                ret_i64(ret, state!(e, id).int("collision_mask", 1));
            }
            ("PhysicsBody3D", "set_collision_layer_value") => {
                let layer = arg_i32(args, 0);
                let value = arg_bool(args, 1);
                if !(1..=32).contains(&layer) {
                    error(&format!("set_collision_layer_value: layer {layer} out of range"));
                } else {
                    let st = state!(e, id);
                    let bit = 1_i64 << (layer - 1);
                    let current = st.int("collision_layer", 1);
                    let next = if value { current | bit } else { current & !bit };
                    st.put("collision_layer", Value::Int(next));
                }
            }
            ("PhysicsBody3D", "get_collision_layer_value") => {
                let layer = arg_i32(args, 0);
                let value = if (1..=32).contains(&layer) {
                    state!(e, id).int("collision_layer", 1) & (1_i64 << (layer - 1)) != 0
                } else {
                    error(&format!("get_collision_layer_value: layer {layer} out of range"));
                    false
                };
                ret_bool(ret, value);
            }

            // --- RigidBody3D ----------------------------------------------------------------
            ("RigidBody3D", "set_mass") => {
                let mass = arg_f64(args, 0);
                if mass <= 0.0 {
                    error("set_mass: mass must be positive");
                } else {
                    state!(e, id).put("mass", Value::Float(mass));
                }
            }
            ("RigidBody3D", "get_mass") => {
                ret_f32(ret, state!(e, id).float("mass", 1.0) as f32);
            }
            ("RigidBody3D", "set_gravity_scale") => {
                let v = arg_f64(args, 0);
                state!(e, id).put("gravity_scale", Value::Float(v));
            }
            ("RigidBody3D", "get_gravity_scale") => {
                ret_f32(ret, state!(e, id).float("gravity_scale", 1.0) as f32);
            }
            ("RigidBody3D", "set_linear_velocity") => {
                let v = arg_v3(args, 0);
                state!(e, id).put("linear_velocity", Value::Vec3(v));
            }
            ("RigidBody3D", "get_linear_velocity") => {
                ret_v3(ret, state!(e, id).vec3("linear_velocity", [0.0, 0.0, 0.0]));
            }
            ("RigidBody3D", "set_angular_velocity") => {
                let v = arg_v3(args, 0);
                state!(e, id).put("angular_velocity", Value::Vec3(v));
            }
            ("RigidBody3D", "get_angular_velocity") => {
                ret_v3(ret, state!(e, id).vec3("angular_velocity", [0.0, 0.0, 0.0]));
            }
            ("RigidBody3D", "apply_central_impulse")
            | ("RigidBody3D", "apply_impulse")
            | ("RigidBody3D", "apply_force") => {
                let central = bind.method == "apply_central_impulse";
                let impulse = arg_v3(args, 0);
                let position = if central { [0.0; 3] } else { arg_v3(args, 1) };
                let st = state!(e, id);
                let inv_mass = 1.0 / st.float("mass", 1.0) as f32;

                let lv = st.vec3("linear_velocity", [0.0; 3]);
                st.put(
                    "linear_velocity",
                    Value::Vec3(v3_add(lv, v3_scale(impulse, inv_mass))),
                );
                let av = st.vec3("angular_velocity", [0.0; 3]);
                st.put(
                    "angular_velocity",
                    Value::Vec3(v3_add(av, v3_scale(v3_cross(position, impulse), inv_mass))),
                );
            }
            ("RigidBody3D", "set_sleeping") => {
                let v = arg_bool(args, 0);
                state!(e, id).put("sleeping", Value::Bool(v));
            }
            ("RigidBody3D", "is_sleeping") => {
                ret_bool(ret, state!(e, id).flag("sleeping", false));
            }
            ("RigidBody3D", "set_contact_monitor") => {
                let v = arg_bool(args, 0);
                state!(e, id).put("contact_monitor", Value::Bool(v));
            }
            ("RigidBody3D", "is_contact_monitor_enabled") => {
                ret_bool(ret, state!(e, id).flag("contact_monitor", false));
            }
            ("RigidBody3D", "set_max_contacts_reported") => {
                let v = arg_i64(args, 0);
                state!(e, id).put("max_contacts_reported", Value::Int(v));
            }
            ("RigidBody3D", "get_max_contacts_reported") => {
                ret_i64(ret, state!(e, id).int("max_contacts_reported", 0));
            }
            ("RigidBody3D", "set_freeze_mode")
            | ("RigidBody3D", "set_center_of_mass_mode")
            | ("RigidBody3D", "set_linear_damp_mode")
            | ("RigidBody3D", "set_angular_damp_mode") => {
                let v = arg_i64(args, 0);
                let key = bind.method.strip_prefix("set_").unwrap();
                state!(e, id).put(key, Value::Int(v));
            }
            ("RigidBody3D", "get_freeze_mode")
            | ("RigidBody3D", "get_center_of_mass_mode")
            | ("RigidBody3D", "get_linear_damp_mode")
            | ("RigidBody3D", "get_angular_damp_mode") => {
                let key = bind.method.strip_prefix("get_").unwrap();
                ret_i64(ret, state!(e, id).int(key, 0));
            }

            // --- Tree -----------------------------------------------------------------------
            ("Tree", "create_item") => {
                let parent = arg_object(args, 0);
                let index = arg_i32(args, 1);
                let ptr = create_tree_item(e, id, parent, index);
                ret_object(ret, Some(ptr));
            }
            ("Tree", "get_root") => {
                let root = state!(e, id).tree_root;
                ret_object(ret, root.and_then(|r| item_ptr(e, r)));
            }
            ("Tree", "clear") => {
                let st = state!(e, id);
                let root = st.tree_root.take();
                st.tree_selected = None;
                st.put("item_counter", Value::Int(0));
                if let Some(root) = root {
                    let mut items = Vec::new();
                    collect_items(e, root, &mut items);
                    for item in items {
                        released.extend(destroy_locked(e, item));
                    }
                }
            }
            ("Tree", "set_columns") => {
                let columns = arg_i64(args, 0);
                if columns < 1 {
                    error("set_columns: must have at least one column");
                } else {
                    state!(e, id).put("columns", Value::Int(columns));
                }
            }
            ("Tree", "get_columns") => {
                ret_i64(ret, state!(e, id).int("columns", 1));
            }
            ("Tree", "set_column_title") => {
                let column = arg_i32(args, 0);
                let title = arg_str(args, 1);
                state!(e, id).put(&format!("column_title_{column}"), Value::Text(title));
            }
            ("Tree", "get_column_title") => {
                let column = arg_i32(args, 0);
                ret_str(ret, state!(e, id).text(&format!("column_title_{column}"), ""));
            }
            ("Tree", "get_selected") => {
                let selected = state!(e, id).tree_selected;
                ret_object(ret, selected.and_then(|(item, _)| item_ptr(e, item)));
            }
            ("Tree", "get_selected_column") => {
                let selected = state!(e, id).tree_selected;
                ret_i64(ret, selected.map_or(-1, |(_, col)| col as i64));
            }
            ("Tree", "set_select_mode") => {
                let mode = arg_i64(args, 0);
                state!(e, id).put("select_mode", Value::Int(mode));
            }
            ("Tree", "get_select_mode") => {
                ret_i64(ret, state!(e, id).int("select_mode", 0));
            }
            ("Tree", "get_item_area_rect") => {
                let item = arg_object(args, 0);
                let column = arg_i32(args, 1);
                let columns = state!(e, id).int("columns", 1) as f32;
                let order = item
                    .and_then(|i| e.objects.get(&i))
                    .map_or(0, |st| st.int("order", 0)) as f32;
                let rect = if column < 0 {
                    [0.0, order * 24.0, columns * 100.0, 24.0]
                } else {
                    [column as f32 * 100.0, order * 24.0, 100.0, 24.0]
                };
                ret_quad(ret, rect);
            }

            // --- TreeItem -------------------------------------------------------------------
            ("TreeItem", "set_text") => {
                let column = arg_i32(args, 0);
                let text = arg_str(args, 1);
                state!(e, id).put(&format!("cell_text_{column}"), Value::Text(text));
            }
            ("TreeItem", "get_text") => {
                let column = arg_i32(args, 0);
                ret_str(ret, state!(e, id).text(&format!("cell_text_{column}"), ""));
            }
            ("TreeItem", "select") => {
                let column = arg_i32(args, 0);
                let tree_id = state!(e, id).item_tree.expect("item without tree");
                let columns = state!(e, tree_id).int("columns", 1) as i32;
                if !(0..columns).contains(&column) {
                    error(&format!("select: column {column} out of range"));
                } else {
                    // Single-select semantics: the previous selection is dropped.
                    if let Some((prev, prev_col)) = state!(e, tree_id).tree_selected {
                        if let Some(prev_state) = e.objects.get_mut(&prev) {
                            prev_state.put(&format!("cell_selected_{prev_col}"), Value::Bool(false));
                        }
                    }
                    state!(e, id).put(&format!("cell_selected_{column}"), Value::Bool(true));
                    state!(e, tree_id).tree_selected = Some((id, column));
                    pending.push((tree_id, "item_selected"));
                }
            }
            ("TreeItem", "deselect") => {
                let column = arg_i32(args, 0);
                state!(e, id).put(&format!("cell_selected_{column}"), Value::Bool(false));
                let tree_id = state!(e, id).item_tree.expect("item without tree");
                let tree = state!(e, tree_id);
                if tree.tree_selected == Some((id, column)) {
                    tree.tree_selected = None;
                }
            }
            ("TreeItem", "is_selected") => {
                let column = arg_i32(args, 0);
                ret_bool(ret, state!(e, id).flag(&format!("cell_selected_{column}"), false));
            }
            ("TreeItem", "set_custom_bg_color") => {
                let column = arg_i32(args, 0);
                let color = arg_quad(args, 1);
                state!(e, id).put(&format!("cell_bg_{column}"), Value::Quad(color));
            }
            ("TreeItem", "get_custom_bg_color") => {
                let column = arg_i32(args, 0);
                ret_quad(
                    ret,
                    state!(e, id).quad(&format!("cell_bg_{column}"), [0.0, 0.0, 0.0, 0.0]),
                );
            }
            ("TreeItem", "create_child") => {
                let index = arg_i32(args, 0);
                let tree_id = state!(e, id).item_tree.expect("item without tree");
                let ptr = create_tree_item(e, tree_id, Some(id), index);
                ret_object(ret, Some(ptr));
            }
            ("TreeItem", "get_parent") => {
                let parent = state!(e, id).item_parent;
                ret_object(ret, parent.and_then(|p| item_ptr(e, p)));
            }
            ("TreeItem", "get_next") => {
                let parent = state!(e, id).item_parent;
                let next = parent.and_then(|p| {
                    let siblings = &e.objects.get(&p)?.item_children;
                    let pos = siblings.iter().position(|s| *s == id)?;
                    siblings.get(pos + 1).copied()
                });
                ret_object(ret, next.and_then(|n| item_ptr(e, n)));
            }
            ("TreeItem", "get_first_child") => {
                let first = state!(e, id).item_children.first().copied();
                ret_object(ret, first.and_then(|f| item_ptr(e, f)));
            }

            _ => panic!(
                "mock engine: unimplemented ptrcall {}::{}",
                bind.class, bind.method
            ),
        }
    }

    release_callables(&released);
    for (target, signal) in pending {
        fire_signal(target, signal);
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Varcall dispatch (emit_signal)

pub unsafe fn varcall(
    bind: &MethodBind,
    instance: *mut c_void,
    args: *const sys::AxiConstVariantPtr,
    arg_count: i64,
    r_ret: sys::AxiUninitializedVariantPtr,
    r_error: *mut sys::AxiCallError,
) {
    (*r_error).error = sys::AXI_CALL_OK;
    (*r_error).argument = 0;
    (*r_error).expected = 0;

    if (bind.class, bind.method) != ("Object", "emit_signal") {
        (*r_error).error = sys::AXI_CALL_ERROR_INVALID_METHOD;
        return;
    }

    let id = instance_id(instance);
    let arg_count = arg_count as usize;
    assert!(arg_count >= 1, "emit_signal requires the signal name");

    let VariantValue::StringName(name) = values::variant_ref(*args) else {
        (*r_error).error = sys::AXI_CALL_ERROR_INVALID_ARGUMENT;
        (*r_error).expected = sys::AXI_VARIANT_TYPE_STRING_NAME as i32;
        return;
    };
    let signal = (**name).clone();
    let varargs = arg_count - 1;

    let callables: Vec<usize> = {
        let e = engine().lock().unwrap();
        let Some(state) = e.objects.get(&id) else {
            (*r_error).error = sys::AXI_CALL_ERROR_INSTANCE_IS_NULL;
            return;
        };

        let Some(params) = signal_params(state.class, &signal) else {
            error(&format!("emit_signal: no signal '{signal}' in {}", state.class));
            values::write_variant(r_ret, VariantValue::Int(2)); // ERR_UNAVAILABLE
            return;
        };

        if varargs > params.len() {
            (*r_error).error = sys::AXI_CALL_ERROR_TOO_MANY_ARGUMENTS;
            (*r_error).expected = params.len() as i32;
            return;
        }
        if varargs < params.len() {
            (*r_error).error = sys::AXI_CALL_ERROR_TOO_FEW_ARGUMENTS;
            (*r_error).expected = params.len() as i32;
            return;
        }
        for (i, expected) in params.iter().enumerate() {
            let actual = values::variant_ref(*args.add(i + 1)).type_ord();
            if actual != *expected {
                (*r_error).error = sys::AXI_CALL_ERROR_INVALID_ARGUMENT;
                (*r_error).argument = i as i32;
                (*r_error).expected = *expected as i32;
                return;
            }
        }

        state
            .connections
            .iter()
            .filter(|c| c.signal == signal)
            .map(|c| {
                values::callable_inc(c.callable as *mut HostCallable);
                c.callable
            })
            .collect()
    };

    // Lock released; handlers may re-enter the engine.
    let handler_args: Vec<sys::AxiConstVariantPtr> =
        (0..varargs).map(|i| *args.add(i + 1)).collect();
    for c in &callables {
        invoke_callable(*c as *mut HostCallable, &handler_args);
    }
    release_callables(&callables);

    values::write_variant(r_ret, VariantValue::Int(0)); // OK
}
