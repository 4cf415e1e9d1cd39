use tictactoe_core as game;
use game::ToCellIndex;
use yew::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Msg {
    Play(usize),
    JumpTo(usize),
    NewGame,
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    index: usize,
    cell: game::Cell,
    #[prop_or_default]
    winning: bool,
    #[prop_or_default]
    locked: bool,
    callback: Callback<usize>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    use game::{Cell::*, Mark::*};

    let CellProps {
        index,
        cell,
        winning,
        locked,
        callback,
    } = props.clone();

    let class = classes!(
        "cell",
        match cell {
            Empty => "empty",
            Taken(X) => "x",
            Taken(O) => "o",
        },
        winning.then_some("win"),
        locked.then_some("locked")
    );

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("cell {} clicked", index);
        callback.emit(index);
    });

    html! {
        <td {class} {onclick}>{cell.label()}</td>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct MoveListProps {
    len: usize,
    current: usize,
    callback: Callback<usize>,
}

fn move_label(move_number: usize) -> String {
    if move_number == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{}", move_number)
    }
}

#[function_component(MoveListView)]
fn move_list_component(props: &MoveListProps) -> Html {
    let MoveListProps {
        len,
        current,
        callback,
    } = props.clone();

    html! {
        <ol class="moves">
            {
                for (0..len).map(|move_number| {
                    let label = move_label(move_number);
                    let entry = if move_number == current {
                        html! { <span class="current">{label}</span> }
                    } else {
                        let callback = callback.clone();
                        let onclick = Callback::from(move |_: MouseEvent| callback.emit(move_number));
                        html! { <button {onclick}>{label}</button> }
                    };
                    html! { <li>{entry}</li> }
                })
            }
        </ol>
    }
}

/// Owns the game history and forwards cell clicks to it.
#[derive(Debug, Default)]
pub struct BoardView {
    history: game::History,
}

impl BoardView {
    fn current(&self) -> &game::GameState {
        self.history.current()
    }

    fn play(&mut self, index: usize) -> bool {
        match self.history.play(index) {
            Ok(outcome) => {
                log::debug!("play {}: {:?}", index, outcome);
                outcome.has_update()
            }
            Err(err) => {
                log::warn!("rejected move: {}", err);
                false
            }
        }
    }

    fn jump_to(&mut self, move_number: usize) -> bool {
        if move_number == self.history.move_number() {
            return false;
        }

        match self.history.jump_to(move_number) {
            Ok(()) => {
                log::debug!("jump to move #{}", move_number);
                true
            }
            Err(err) => {
                log::warn!("{}", err);
                false
            }
        }
    }

    fn new_game(&mut self) -> bool {
        if self.history.len() == 1 {
            return false;
        }

        self.history.reset();
        log::debug!("new game");
        true
    }
}

impl Component for BoardView {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self::default()
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Play(index) => self.play(index),
            JumpTo(move_number) => self.jump_to(move_number),
            NewGame => self.new_game(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let state = self.current();
        let status = state.status();
        let winning_line = state.winning_line();

        let cb_new_game = ctx.link().callback(|_: MouseEvent| Msg::NewGame);
        let cb_jump_to = ctx.link().callback(Msg::JumpTo);

        html! {
            <div class="tictactoe">
                <div class="status">{status.to_string()}</div>
                <table class={classes!("board", status.is_finished().then_some("finished"))}>
                    {
                        for (0..game::SIDE).map(|y| html! {
                            <tr>
                                {
                                    for (0..game::SIDE).map(|x| {
                                        let index = (x, y).to_cell_index();
                                        let cell = state.grid()[index];
                                        let winning = winning_line.is_some_and(|line| line.contains(&index));
                                        let locked = !state.can_play_at(index);
                                        let callback = ctx.link().callback(Msg::Play);
                                        html! {
                                            <CellView {index} {cell} {winning} {locked} {callback}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
                <nav>
                    <button onclick={cb_new_game}>{"New game"}</button>
                </nav>
                <MoveListView
                    len={self.history.len()}
                    current={self.history.move_number()}
                    callback={cb_jump_to}
                />
            </div>
        }
    }
}
