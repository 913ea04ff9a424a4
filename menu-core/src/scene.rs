/// Host-side scene management. The navigator only forwards requests.
pub trait SceneHost {
    fn load_scene(&mut self, name: &str);
    fn load_scene_index(&mut self, index: usize);
    fn reload_current_scene(&mut self);
    fn quit(&mut self);
}
