use std::cell::RefCell;
use std::rc::Rc;

pub type SubId = usize;

/// Cloneable observable value. Subscribers run after every write and see a
/// snapshot of the new value; they may read or write the signal again.
#[derive(Clone)]
pub struct Signal<T: 'static>(Rc<Inner<T>>);

struct Inner<T> {
    value: RefCell<T>,
    subs: RefCell<Vec<Option<Rc<dyn Fn(&T)>>>>,
}

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(Inner {
            value: RefCell::new(value),
            subs: RefCell::new(Vec::new()),
        }))
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.0.value.borrow().clone()
    }

    pub fn set(&self, v: T)
    where
        T: Clone,
    {
        *self.0.value.borrow_mut() = v;
        self.notify();
    }

    pub fn update<F: FnOnce(&mut T)>(&self, f: F)
    where
        T: Clone,
    {
        f(&mut self.0.value.borrow_mut());
        self.notify();
    }

    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubId {
        let mut subs = self.0.subs.borrow_mut();
        subs.push(Some(Rc::new(f)));
        subs.len() - 1
    }

    /// Returns false if `id` was never handed out or is already gone.
    pub fn unsubscribe(&self, id: SubId) -> bool {
        self.0
            .subs
            .borrow_mut()
            .get_mut(id)
            .and_then(Option::take)
            .is_some()
    }

    fn notify(&self)
    where
        T: Clone,
    {
        // no borrow is held while callbacks run
        let subs: Vec<Rc<dyn Fn(&T)>> = self.0.subs.borrow().iter().flatten().cloned().collect();
        let value = self.0.value.borrow().clone();
        for s in subs {
            s(&value);
        }
    }
}

pub fn signal<T>(t: T) -> Signal<T> {
    Signal::new(t)
}
